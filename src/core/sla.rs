//! SLA policy and per-ticket SLA tracking
//!
//! The policy is a pure lookup from priority to deadline windows, evaluated
//! once when a ticket is created. The resolution window is always four times
//! the first-response window; only the first-response hours are tunable.

use super::{SlaConfigId, Ticket, TicketId, TicketPriority};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// First-response windows per priority, in hours
///
/// Defaults match the product SLA: urgent 1h, high 4h, medium 8h, low 24h.
/// Deployments can override the hours through configuration; the 4x
/// resolution multiplier is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlaPolicy {
    pub urgent_hours: i64,
    pub high_hours: i64,
    pub medium_hours: i64,
    pub low_hours: i64,
}

impl Default for SlaPolicy {
    fn default() -> Self {
        Self {
            urgent_hours: 1,
            high_hours: 4,
            medium_hours: 8,
            low_hours: 24,
        }
    }
}

impl SlaPolicy {
    /// Returns the first-response window for a priority
    #[must_use]
    pub fn first_response_window(&self, priority: TicketPriority) -> Duration {
        let hours = match priority {
            TicketPriority::Urgent => self.urgent_hours,
            TicketPriority::High => self.high_hours,
            TicketPriority::Medium => self.medium_hours,
            TicketPriority::Low => self.low_hours,
        };
        Duration::hours(hours)
    }

    /// Returns the resolution window for a priority
    ///
    /// Always four times the first-response window.
    #[must_use]
    pub fn resolution_window(&self, priority: TicketPriority) -> Duration {
        let hours = match priority {
            TicketPriority::Urgent => self.urgent_hours,
            TicketPriority::High => self.high_hours,
            TicketPriority::Medium => self.medium_hours,
            TicketPriority::Low => self.low_hours,
        };
        Duration::hours(hours * 4)
    }
}

/// SLA deadlines and tracking flags for one ticket
///
/// Exactly one `SlaConfig` exists per ticket, created in the same
/// transaction as the ticket itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaConfig {
    /// Unique identifier
    pub id: SlaConfigId,
    /// The ticket this SLA row belongs to; unique across the store
    pub ticket: TicketId,
    /// Deadline for the first message on the ticket
    pub first_response_deadline: DateTime<Utc>,
    /// Deadline for resolving the ticket
    pub resolution_deadline: DateTime<Utc>,
    /// Set to true exactly once, when the first message is appended
    pub first_response_met: bool,
    /// Stored for reporting; no operation sets this yet
    pub resolution_met: bool,
    /// When this SLA row was created
    pub created_at: DateTime<Utc>,
}

impl SlaConfig {
    /// Computes the SLA row for a freshly created ticket
    ///
    /// Deadlines are relative to the ticket's creation time, so the
    /// resolution deadline is exactly four first-response windows after
    /// `created_at` regardless of when this is evaluated.
    #[must_use]
    pub fn for_ticket(ticket: &Ticket, policy: &SlaPolicy) -> Self {
        Self {
            id: SlaConfigId::new(),
            ticket: ticket.id,
            first_response_deadline: ticket.created_at
                + policy.first_response_window(ticket.priority),
            resolution_deadline: ticket.created_at + policy.resolution_window(ticket.priority),
            first_response_met: false,
            resolution_met: false,
            created_at: Utc::now(),
        }
    }

    /// Marks the first response as met; returns true if this call changed it
    ///
    /// Idempotent: only the first message on a ticket flips the flag.
    pub fn mark_first_response(&mut self) -> bool {
        if self.first_response_met {
            return false;
        }
        self.first_response_met = true;
        true
    }
}
