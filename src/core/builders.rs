//! Builders for domain entities

use super::{
    OrganizationId, Ticket, TicketId, TicketPriority, TicketStatus, User, UserId, UserRole,
};
use chrono::{DateTime, Utc};

/// Builder for creating [`Ticket`] instances
#[derive(Default)]
pub struct TicketBuilder {
    id: Option<TicketId>,
    title: Option<String>,
    description: Option<String>,
    status: Option<TicketStatus>,
    priority: Option<TicketPriority>,
    organization: Option<OrganizationId>,
    created_by: Option<UserId>,
    assigned_to: Option<UserId>,
    created_at: Option<DateTime<Utc>>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket ID
    #[must_use]
    pub const fn id(mut self, id: TicketId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the status
    #[must_use]
    pub const fn status(mut self, status: TicketStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the priority
    #[must_use]
    pub const fn priority(mut self, priority: TicketPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the owning organization
    #[must_use]
    pub const fn organization(mut self, organization: OrganizationId) -> Self {
        self.organization = Some(organization);
        self
    }

    /// Set the creating user
    #[must_use]
    pub const fn created_by(mut self, created_by: UserId) -> Self {
        self.created_by = Some(created_by);
        self
    }

    /// Set the assignee
    #[must_use]
    pub const fn assigned_to(mut self, assigned_to: UserId) -> Self {
        self.assigned_to = Some(assigned_to);
        self
    }

    /// Set `created_at` timestamp
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Build the ticket
    ///
    /// New tickets start `Open` with `updated_at` equal to `created_at` and
    /// no lifecycle timestamps.
    #[must_use]
    pub fn build(self) -> Ticket {
        let created_at = self.created_at.unwrap_or_else(Utc::now);
        Ticket {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            organization: self.organization.unwrap_or_default(),
            created_by: self.created_by.unwrap_or_default(),
            assigned_to: self.assigned_to,
            created_at,
            updated_at: created_at,
            resolved_at: None,
            closed_at: None,
        }
    }
}

/// Builder for creating [`User`] instances
#[derive(Default)]
pub struct UserBuilder {
    id: Option<UserId>,
    email: Option<String>,
    password_hash: Option<String>,
    full_name: Option<String>,
    role: Option<UserRole>,
    organization: Option<OrganizationId>,
    is_active: Option<bool>,
    created_at: Option<DateTime<Utc>>,
}

impl UserBuilder {
    /// Create a new user builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user ID
    #[must_use]
    pub const fn id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the email address
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the hashed credential
    #[must_use]
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = Some(password_hash.into());
        self
    }

    /// Set the display name
    #[must_use]
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// Set the role
    #[must_use]
    pub const fn role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Set the owning organization
    #[must_use]
    pub const fn organization(mut self, organization: OrganizationId) -> Self {
        self.organization = Some(organization);
        self
    }

    /// Set the active flag
    #[must_use]
    pub const fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    /// Set `created_at` timestamp
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Build the user
    ///
    /// Defaults to an active agent when role or active flag are not set.
    #[must_use]
    pub fn build(self) -> User {
        User {
            id: self.id.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            password_hash: self.password_hash.unwrap_or_default(),
            full_name: self.full_name.unwrap_or_default(),
            role: self.role.unwrap_or(UserRole::Agent),
            organization: self.organization.unwrap_or_default(),
            is_active: self.is_active.unwrap_or(true),
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}
