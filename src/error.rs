//! Error types for the helpdesk engine
//!
//! Every fallible operation in this crate returns [`Result`]. The error
//! taxonomy is deliberately small and stable: each variant maps to exactly
//! one [`ErrorKind`] and one string code so an HTTP boundary can translate
//! failures without inspecting messages.

use crate::core::{OrganizationId, TicketId, UserId};
use thiserror::Error;

/// Result type alias for helpdesk operations
pub type Result<T> = std::result::Result<T, HelpdeskError>;

/// Errors that can occur in the helpdesk engine
#[derive(Debug, Error)]
pub enum HelpdeskError {
    /// The referenced ticket does not exist
    #[error("ticket not found: {id}")]
    TicketNotFound { id: TicketId },

    /// The referenced user does not exist
    #[error("user not found: {id}")]
    UserNotFound { id: UserId },

    /// The referenced organization does not exist
    #[error("organization not found: {id}")]
    OrganizationNotFound { id: OrganizationId },

    /// The acting user belongs to a different organization than the ticket
    #[error("access denied")]
    AccessDenied,

    /// The assignment target does not have the agent role
    #[error("can only assign to agents")]
    AssigneeNotAgent { id: UserId },

    /// The assignment target belongs to a different organization than the ticket
    #[error("agent must be from the same organization")]
    AssigneeOutsideOrganization { id: UserId },

    /// Status changes are rejected once a ticket is closed
    #[error("cannot change status of a closed ticket")]
    TicketClosed { id: TicketId },

    /// Signup with an email address that is already registered
    #[error("email already registered: {email}")]
    EmailTaken { email: String },

    /// Login with an unknown email or a wrong password
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Login against a deactivated account
    #[error("account is inactive")]
    AccountInactive,

    /// A request field failed validation
    #[error("invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    /// Password hashing or verification failed internally
    #[error("credential hashing failed: {0}")]
    Hashing(String),

    /// Token issuance failed in the credential collaborator
    #[error("token issuance failed: {0}")]
    TokenIssuance(String),

    /// Configuration could not be loaded or parsed
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Coarse classification of an error, stable across releases
///
/// This is what an HTTP layer maps to a status code: `NotFound` to 404,
/// `Forbidden` to 403, `BadRequest` to 400 and `Internal` to 500.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Forbidden,
    BadRequest,
    Internal,
}

impl HelpdeskError {
    /// Returns the coarse classification of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TicketNotFound { .. }
            | Self::UserNotFound { .. }
            | Self::OrganizationNotFound { .. } => ErrorKind::NotFound,
            Self::AccessDenied => ErrorKind::Forbidden,
            Self::AssigneeNotAgent { .. }
            | Self::AssigneeOutsideOrganization { .. }
            | Self::TicketClosed { .. }
            | Self::EmailTaken { .. }
            | Self::InvalidCredentials
            | Self::AccountInactive
            | Self::Validation { .. } => ErrorKind::BadRequest,
            Self::Hashing(_) | Self::TokenIssuance(_) | Self::Config(_) => ErrorKind::Internal,
        }
    }

    /// Returns a stable machine-readable code for client UIs
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::TicketNotFound { .. } => "ticket_not_found",
            Self::UserNotFound { .. } => "user_not_found",
            Self::OrganizationNotFound { .. } => "organization_not_found",
            Self::AccessDenied => "access_denied",
            Self::AssigneeNotAgent { .. } => "assignee_not_agent",
            Self::AssigneeOutsideOrganization { .. } => "assignee_outside_organization",
            Self::TicketClosed { .. } => "ticket_closed",
            Self::EmailTaken { .. } => "email_taken",
            Self::InvalidCredentials => "invalid_credentials",
            Self::AccountInactive => "account_inactive",
            Self::Validation { .. } => "validation_failed",
            Self::Hashing(_) => "hashing_failed",
            Self::TokenIssuance(_) => "token_issuance_failed",
            Self::Config(_) => "config_error",
        }
    }

    /// Returns true if this error represents a missing resource
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotFound)
    }
}
