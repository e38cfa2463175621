//! Request shapes for the service operations
//!
//! These are the structured fields the boundary layer hands to the engine
//! after authentication. Each request validates its own fields; identity
//! and tenancy checks happen later, inside the transaction.

use crate::core::{MAX_TITLE_LENGTH, TicketPriority, TicketStatus, UserId};
use crate::error::{HelpdeskError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex must compile")
});

fn require_non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HelpdeskError::Validation {
            field,
            reason: "must not be empty".into(),
        });
    }
    Ok(())
}

/// Fields for creating a ticket
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTicketRequest {
    pub title: String,
    pub description: String,
    pub priority: TicketPriority,
}

impl CreateTicketRequest {
    pub fn validate(&self) -> Result<()> {
        require_non_empty("title", &self.title)?;
        let length = self.title.chars().count();
        if length > MAX_TITLE_LENGTH {
            return Err(HelpdeskError::Validation {
                field: "title",
                reason: format!("must be at most {MAX_TITLE_LENGTH} characters, got {length}"),
            });
        }
        require_non_empty("description", &self.description)
    }
}

/// Fields for updating a ticket's status
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: TicketStatus,
}

/// Fields for assigning a ticket to an agent
#[derive(Debug, Clone, Deserialize)]
pub struct AssignTicketRequest {
    pub agent_id: UserId,
}

/// Fields for appending a message to a ticket
#[derive(Debug, Clone, Deserialize)]
pub struct AddMessageRequest {
    pub body: String,
    pub is_internal: bool,
}

impl AddMessageRequest {
    pub fn validate(&self) -> Result<()> {
        require_non_empty("body", &self.body)
    }
}

/// Listing parameters: optional filters plus paging and sorting
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TicketQuery {
    pub status: Option<TicketStatus>,
    pub assigned_to: Option<UserId>,
    #[serde(flatten)]
    pub page: crate::storage::PageRequest,
}

/// Fields for registering a new account
///
/// The first signup for an organization name creates the organization and
/// an admin account in it.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub organization_name: String,
}

impl SignupRequest {
    pub fn validate(&self) -> Result<()> {
        if !EMAIL_RE.is_match(&self.email) {
            return Err(HelpdeskError::Validation {
                field: "email",
                reason: "must be a valid email address".into(),
            });
        }
        require_non_empty("password", &self.password)?;
        require_non_empty("full_name", &self.full_name)?;
        require_non_empty("organization_name", &self.organization_name)
    }
}

/// Fields for logging in
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(title: &str) -> CreateTicketRequest {
        CreateTicketRequest {
            title: title.to_string(),
            description: "Something broke".to_string(),
            priority: TicketPriority::Medium,
        }
    }

    #[test]
    fn test_create_request_accepts_normal_title() {
        assert!(create_request("Login broken").validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_blank_title() {
        let err = create_request("   ").validate().unwrap_err();
        assert!(matches!(err, HelpdeskError::Validation { field: "title", .. }));
    }

    #[test]
    fn test_create_request_rejects_over_long_title() {
        let err = create_request(&"x".repeat(MAX_TITLE_LENGTH + 1))
            .validate()
            .unwrap_err();
        assert!(matches!(err, HelpdeskError::Validation { field: "title", .. }));
    }

    #[test]
    fn test_title_limit_counts_characters_not_bytes() {
        // 500 multi-byte characters are within the limit
        assert!(create_request(&"ü".repeat(MAX_TITLE_LENGTH)).validate().is_ok());
    }

    #[test]
    fn test_message_request_rejects_empty_body() {
        let request = AddMessageRequest {
            body: String::new(),
            is_internal: false,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_ticket_query_deserializes_without_paging_keys() {
        let empty: TicketQuery = serde_json::from_str("{}").expect("Failed to parse");
        assert!(empty.status.is_none());
        assert_eq!(empty.page, crate::storage::PageRequest::default());

        let filtered: TicketQuery =
            serde_json::from_str(r#"{"status": "open", "page": 1}"#).expect("Failed to parse");
        assert_eq!(filtered.status, Some(TicketStatus::Open));
        assert_eq!(filtered.page.page, 1);
        assert_eq!(filtered.page.size, 10);
    }

    #[test]
    fn test_signup_request_validates_email() {
        let mut request = SignupRequest {
            email: "pat@acme.test".into(),
            password: "hunter2hunter2".into(),
            full_name: "Pat Doe".into(),
            organization_name: "Acme".into(),
        };
        assert!(request.validate().is_ok());

        request.email = "not-an-email".into();
        let err = request.validate().unwrap_err();
        assert!(matches!(err, HelpdeskError::Validation { field: "email", .. }));
    }
}
