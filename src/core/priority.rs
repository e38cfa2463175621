//! Ticket priority values

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority of a ticket, set at creation
///
/// Priority drives the SLA deadlines computed when the ticket is filed
/// (see [`SlaPolicy`](crate::core::SlaPolicy)). The derived ordering goes
/// from least to most urgent and is used for sorting ticket listings.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    /// Returns all priority values from least to most urgent
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Low, Self::Medium, Self::High, Self::Urgent]
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        };
        write!(f, "{s}")
    }
}

impl FromStr for TicketPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(format!("unknown ticket priority: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_ordering() {
        assert!(TicketPriority::Low < TicketPriority::Medium);
        assert!(TicketPriority::High < TicketPriority::Urgent);
    }

    #[test]
    fn test_parse_and_display_roundtrip() {
        for priority in TicketPriority::all() {
            let parsed: TicketPriority = priority.to_string().parse().expect("Failed to parse");
            assert_eq!(parsed, priority);
        }
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(TicketPriority::default(), TicketPriority::Medium);
    }
}
