//! Ticket messages: the append-only conversation transcript

use super::{MessageId, TicketId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single message on a ticket
///
/// Messages are never edited or deleted by ticket operations; the visible
/// transcript is the list of messages in ascending creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketMessage {
    /// Unique identifier
    pub id: MessageId,
    /// Ticket this message belongs to, immutable
    pub ticket: TicketId,
    /// Author of the message, immutable
    pub author: UserId,
    /// Message text
    pub body: String,
    /// Internal notes are meant to be hidden from non-staff viewers.
    /// Stored here as-is; visibility filtering is a boundary-layer concern.
    pub is_internal: bool,
    /// Creation time; defines transcript ordering
    pub created_at: DateTime<Utc>,
}

impl TicketMessage {
    /// Creates a new message on a ticket
    #[must_use]
    pub fn new(
        ticket: TicketId,
        author: UserId,
        body: impl Into<String>,
        is_internal: bool,
    ) -> Self {
        Self {
            id: MessageId::new(),
            ticket,
            author,
            body: body.into(),
            is_internal,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message() {
        let ticket = TicketId::new();
        let author = UserId::new();
        let message = TicketMessage::new(ticket, author, "Looking into it", true);
        assert_eq!(message.ticket, ticket);
        assert_eq!(message.author, author);
        assert!(message.is_internal);
    }
}
