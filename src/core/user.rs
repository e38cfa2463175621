//! Users and roles

use super::{OrganizationId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a user within its organization
///
/// Both roles are organization-scoped; neither grants access to tickets of
/// other organizations. Only agents can be assigned to tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Administers the organization; the first signup of a new organization
    Admin,
    /// Works tickets and can be an assignee
    Agent,
}

impl UserRole {
    /// Returns true if users with this role may be assigned tickets
    #[must_use]
    pub const fn can_be_assignee(self) -> bool {
        matches!(self, Self::Agent)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Admin => "admin",
            Self::Agent => "agent",
        };
        write!(f, "{s}")
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "agent" => Ok(Self::Agent),
            _ => Err(format!("unknown user role: {s}")),
        }
    }
}

/// A user account, bound to exactly one organization for its lifetime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Email address, unique across the store
    pub email: String,
    /// Hashed credential; never the plain password
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Display name
    pub full_name: String,
    /// Role within the organization
    pub role: UserRole,
    /// Owning organization, immutable after creation
    pub organization: OrganizationId,
    /// Deactivated accounts cannot log in
    pub is_active: bool,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Returns true if this user belongs to the given organization
    #[must_use]
    pub fn belongs_to(&self, organization: OrganizationId) -> bool {
        self.organization == organization
    }
}
