//! Organizations: the tenant isolation boundary
//!
//! Every user and every ticket belongs to exactly one organization, and no
//! operation may read or write ticket data across that boundary.

use super::OrganizationId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tenant organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Unique identifier
    pub id: OrganizationId,
    /// Organization name, unique across the store
    pub name: String,
    /// When the organization was created
    pub created_at: DateTime<Utc>,
}

impl Organization {
    /// Creates a new organization with the given name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: OrganizationId::new(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}
