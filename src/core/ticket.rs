//! Tickets and their status lifecycle
//!
//! The lifecycle rules live on [`Ticket`] itself so they are enforced no
//! matter which service or store drives the mutation. The policy is
//! deliberately permissive: any transition is accepted except changing a
//! closed ticket, which is terminal.

use super::{OrganizationId, TicketId, TicketPriority, TicketStatus, UserId};
use crate::error::{HelpdeskError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum length of a ticket title, in characters
pub const MAX_TITLE_LENGTH: usize = 500;

/// A support ticket, scoped to exactly one organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique identifier
    pub id: TicketId,
    /// Short summary, at most [`MAX_TITLE_LENGTH`] characters
    pub title: String,
    /// Full problem description
    pub description: String,
    /// Current lifecycle status
    pub status: TicketStatus,
    /// Priority, fixed at creation; drives SLA deadlines
    pub priority: TicketPriority,
    /// Owning organization, set from the creator's and immutable
    pub organization: OrganizationId,
    /// User who filed the ticket, immutable
    pub created_by: UserId,
    /// Agent currently assigned, if any; must share the ticket's organization
    pub assigned_to: Option<UserId>,
    /// When the ticket was filed
    pub created_at: DateTime<Utc>,
    /// Bumped by the store on every save
    pub updated_at: DateTime<Utc>,
    /// Stamped when the ticket enters [`TicketStatus::Resolved`]
    pub resolved_at: Option<DateTime<Utc>>,
    /// Stamped when the ticket enters [`TicketStatus::Closed`]
    pub closed_at: Option<DateTime<Utc>>,
}

impl Ticket {
    /// Applies a status transition, stamping lifecycle timestamps
    ///
    /// Fails with [`HelpdeskError::TicketClosed`] if the ticket is already
    /// closed; every other requested transition is accepted, including
    /// backward moves. Entering `Resolved` or `Closed` records `now` in the
    /// corresponding timestamp.
    pub fn change_status(&mut self, next: TicketStatus, now: DateTime<Utc>) -> Result<()> {
        if self.status.is_closed() {
            return Err(HelpdeskError::TicketClosed { id: self.id });
        }
        self.status = next;
        match next {
            TicketStatus::Resolved => self.resolved_at = Some(now),
            TicketStatus::Closed => self.closed_at = Some(now),
            TicketStatus::Open | TicketStatus::InProgress => {}
        }
        Ok(())
    }

    /// Assigns (or re-assigns) an agent to this ticket
    ///
    /// Assignment is not a lifecycle transition, but it has one coupled
    /// effect: an `Open` ticket auto-advances to `InProgress`. Role and
    /// organization checks on the agent are the access guard's job and must
    /// run before this is called.
    pub fn assign(&mut self, agent: UserId) {
        self.assigned_to = Some(agent);
        if self.status == TicketStatus::Open {
            self.status = TicketStatus::InProgress;
        }
    }
}
