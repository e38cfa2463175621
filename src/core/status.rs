//! Ticket status lifecycle values

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a ticket within its lifecycle
///
/// Tickets start [`Open`](Self::Open) and normally move through
/// [`InProgress`](Self::InProgress) and [`Resolved`](Self::Resolved) to
/// [`Closed`](Self::Closed). `Closed` is terminal: no further status change
/// is accepted. Any other transition, including backward moves, is allowed.
///
/// The derived ordering follows lifecycle progression and is used for
/// sorting ticket listings.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Newly filed, no agent working on it yet
    #[default]
    Open,
    /// An agent is actively working on the ticket
    InProgress,
    /// The reported issue has been addressed
    Resolved,
    /// Terminal state; the ticket can no longer change status
    Closed,
}

impl TicketStatus {
    /// Returns true for the terminal state
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Returns all status values in lifecycle order
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Open, Self::InProgress, Self::Resolved, Self::Closed]
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        };
        write!(f, "{s}")
    }
}

impl FromStr for TicketStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "in_progress" | "in-progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            "closed" => Ok(Self::Closed),
            _ => Err(format!("unknown ticket status: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_open() {
        assert_eq!(TicketStatus::default(), TicketStatus::Open);
    }

    #[test]
    fn test_only_closed_is_terminal() {
        for status in TicketStatus::all() {
            assert_eq!(status.is_closed(), status == TicketStatus::Closed);
        }
    }

    #[test]
    fn test_parse_and_display_roundtrip() {
        for status in TicketStatus::all() {
            let parsed: TicketStatus = status.to_string().parse().expect("Failed to parse");
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_parse_accepts_hyphenated_in_progress() {
        assert_eq!(
            "in-progress".parse::<TicketStatus>().unwrap(),
            TicketStatus::InProgress
        );
    }

    #[test]
    fn test_lifecycle_ordering() {
        assert!(TicketStatus::Open < TicketStatus::InProgress);
        assert!(TicketStatus::Resolved < TicketStatus::Closed);
    }
}
