//! Response shapes returned by the service operations
//!
//! Flattened views of the domain entities, safe to hand to a boundary
//! layer: user references are expanded to display data and the credential
//! hash never appears.

use crate::core::{
    MessageId, SlaConfig, Ticket, TicketId, TicketMessage, TicketPriority, TicketStatus, User,
    UserId, UserRole,
};
use crate::error::Result;
use crate::storage::StoreTx;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Public view of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub organization_name: String,
}

impl UserResponse {
    /// Builds the view for a user, resolving the organization name
    pub fn for_user(tx: &mut dyn StoreTx, user: &User) -> Result<Self> {
        let organization = tx.organizations().require(user.organization)?;
        Ok(Self {
            id: user.id,
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            role: user.role,
            organization_name: organization.name,
        })
    }

    /// Builds the view for a user id
    pub fn for_user_id(tx: &mut dyn StoreTx, id: UserId) -> Result<Self> {
        let user = tx.users().require(id)?;
        Self::for_user(tx, &user)
    }
}

/// SLA deadlines and tracking state of a ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlaResponse {
    pub first_response_deadline: DateTime<Utc>,
    pub resolution_deadline: DateTime<Utc>,
    pub first_response_met: bool,
    pub resolution_met: bool,
}

impl From<&SlaConfig> for SlaResponse {
    fn from(sla: &SlaConfig) -> Self {
        Self {
            first_response_deadline: sla.first_response_deadline,
            resolution_deadline: sla.resolution_deadline,
            first_response_met: sla.first_response_met,
            resolution_met: sla.resolution_met,
        }
    }
}

/// Full view of a ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketResponse {
    pub id: TicketId,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub created_by: UserResponse,
    pub assigned_to: Option<UserResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
    pub sla: Option<SlaResponse>,
}

impl TicketResponse {
    /// Builds the view for a ticket, expanding user references and SLA state
    pub fn for_ticket(tx: &mut dyn StoreTx, ticket: &Ticket) -> Result<Self> {
        let created_by = UserResponse::for_user_id(tx, ticket.created_by)?;
        let assigned_to = match ticket.assigned_to {
            Some(agent) => Some(UserResponse::for_user_id(tx, agent)?),
            None => None,
        };
        let sla = tx
            .sla()
            .find_by_ticket(ticket.id)?
            .as_ref()
            .map(SlaResponse::from);
        Ok(Self {
            id: ticket.id,
            title: ticket.title.clone(),
            description: ticket.description.clone(),
            status: ticket.status,
            priority: ticket.priority,
            created_by,
            assigned_to,
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
            resolved_at: ticket.resolved_at,
            closed_at: ticket.closed_at,
            sla,
        })
    }
}

/// View of a single ticket message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub id: MessageId,
    pub body: String,
    pub is_internal: bool,
    pub author: UserResponse,
    pub created_at: DateTime<Utc>,
}

impl MessageResponse {
    /// Builds the view for a message, expanding the author reference
    pub fn for_message(tx: &mut dyn StoreTx, message: &TicketMessage) -> Result<Self> {
        let author = UserResponse::for_user_id(tx, message.author)?;
        Ok(Self {
            id: message.id,
            body: message.body.clone(),
            is_internal: message.is_internal,
            author,
            created_at: message.created_at,
        })
    }
}

/// Result of a successful signup or login
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserResponse,
}
