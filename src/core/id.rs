//! Strongly-typed identifiers for domain entities
//!
//! Each entity gets its own UUID newtype so an organization id can never be
//! passed where a ticket id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a new random identifier
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wraps an existing UUID
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID
            #[must_use]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

entity_id! {
    /// Identifier for an [`Organization`](crate::core::Organization)
    OrganizationId
}

entity_id! {
    /// Identifier for a [`User`](crate::core::User)
    UserId
}

entity_id! {
    /// Identifier for a [`Ticket`](crate::core::Ticket)
    TicketId
}

entity_id! {
    /// Identifier for a [`TicketMessage`](crate::core::TicketMessage)
    MessageId
}

entity_id! {
    /// Identifier for an [`SlaConfig`](crate::core::SlaConfig)
    SlaConfigId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(TicketId::new(), TicketId::new());
    }

    #[test]
    fn test_id_display_roundtrip() {
        let id = UserId::new();
        let parsed: UserId = id.to_string().parse().expect("Failed to parse id");
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<TicketId>().is_err());
    }
}
