//! Ticket operations
//!
//! Each operation is a self-contained unit of work: it takes the request
//! fields plus an already-authenticated acting user id, runs the access
//! guard and the mutation inside one store transaction, and returns a
//! response view or a typed error. Nothing is retried and nothing partially
//! applies.

use crate::core::{SlaConfig, SlaPolicy, TicketBuilder, TicketId, TicketMessage, UserId};
use crate::error::Result;
use crate::service::guard::{authorize_ticket_access, check_assignee};
use crate::service::requests::{
    AddMessageRequest, AssignTicketRequest, CreateTicketRequest, TicketQuery, UpdateStatusRequest,
};
use crate::service::responses::{MessageResponse, TicketResponse};
use crate::storage::{Page, Store, TicketFilter};
use chrono::Utc;
use tracing::{debug, info};

/// The ticket lifecycle engine
///
/// Stateless apart from the store handle and the SLA policy; safe to share
/// across threads and call concurrently.
pub struct TicketService<S> {
    store: S,
    sla_policy: SlaPolicy,
}

impl<S: Store> TicketService<S> {
    /// Creates a service with the default SLA policy
    pub fn new(store: S) -> Self {
        Self::with_policy(store, SlaPolicy::default())
    }

    /// Creates a service with a custom SLA policy
    pub fn with_policy(store: S, sla_policy: SlaPolicy) -> Self {
        Self { store, sla_policy }
    }

    /// Files a new ticket in the acting user's organization
    ///
    /// The ticket and its SLA row are created in the same transaction; one
    /// cannot exist without the other.
    pub fn create_ticket(
        &self,
        request: &CreateTicketRequest,
        acting_user: UserId,
    ) -> Result<TicketResponse> {
        request.validate()?;
        self.store.transaction(|tx| {
            let user = tx.users().require(acting_user)?;
            let ticket = TicketBuilder::new()
                .title(request.title.clone())
                .description(request.description.clone())
                .priority(request.priority)
                .organization(user.organization)
                .created_by(user.id)
                .build();
            let ticket = tx.tickets().save(ticket)?;
            let sla = SlaConfig::for_ticket(&ticket, &self.sla_policy);
            tx.sla().save(sla)?;
            info!(ticket = %ticket.id, priority = %ticket.priority, "ticket created");
            TicketResponse::for_ticket(tx, &ticket)
        })
    }

    /// Lists tickets of the acting user's organization
    ///
    /// The organization scope comes from the acting user, never from the
    /// request, so a caller cannot list another tenant's tickets.
    pub fn list_tickets(
        &self,
        query: &TicketQuery,
        acting_user: UserId,
    ) -> Result<Page<TicketResponse>> {
        self.store.transaction(|tx| {
            let user = tx.users().require(acting_user)?;
            let filter = TicketFilter {
                status: query.status,
                assigned_to: query.assigned_to,
            };
            tx.tickets()
                .find_by_organization(user.organization, &filter, &query.page)?
                .try_map(|ticket| TicketResponse::for_ticket(tx, &ticket))
        })
    }

    /// Fetches a single ticket
    pub fn get_ticket(&self, ticket_id: TicketId, acting_user: UserId) -> Result<TicketResponse> {
        self.store.transaction(|tx| {
            let ticket = authorize_ticket_access(tx, ticket_id, acting_user)?;
            TicketResponse::for_ticket(tx, &ticket)
        })
    }

    /// Assigns the ticket to an agent
    ///
    /// The target must be an agent of the ticket's organization. Assigning
    /// an open ticket advances it to in-progress.
    pub fn assign_ticket(
        &self,
        ticket_id: TicketId,
        request: &AssignTicketRequest,
        acting_user: UserId,
    ) -> Result<TicketResponse> {
        self.store.transaction(|tx| {
            let mut ticket = authorize_ticket_access(tx, ticket_id, acting_user)?;
            let agent = tx.users().require(request.agent_id)?;
            check_assignee(&ticket, &agent)?;
            ticket.assign(agent.id);
            let ticket = tx.tickets().save(ticket)?;
            info!(ticket = %ticket.id, agent = %agent.id, "ticket assigned");
            TicketResponse::for_ticket(tx, &ticket)
        })
    }

    /// Applies a status transition to the ticket
    pub fn update_status(
        &self,
        ticket_id: TicketId,
        request: &UpdateStatusRequest,
        acting_user: UserId,
    ) -> Result<TicketResponse> {
        self.store.transaction(|tx| {
            let mut ticket = authorize_ticket_access(tx, ticket_id, acting_user)?;
            ticket.change_status(request.status, Utc::now())?;
            let ticket = tx.tickets().save(ticket)?;
            info!(ticket = %ticket.id, status = %ticket.status, "ticket status updated");
            TicketResponse::for_ticket(tx, &ticket)
        })
    }

    /// Appends a message to the ticket
    ///
    /// The first message on a ticket marks its SLA first response as met;
    /// later messages leave the flag untouched.
    pub fn add_message(
        &self,
        ticket_id: TicketId,
        request: &AddMessageRequest,
        acting_user: UserId,
    ) -> Result<MessageResponse> {
        request.validate()?;
        self.store.transaction(|tx| {
            let ticket = authorize_ticket_access(tx, ticket_id, acting_user)?;
            let message = TicketMessage::new(
                ticket.id,
                acting_user,
                request.body.clone(),
                request.is_internal,
            );
            let message = tx.messages().save(message)?;
            if let Some(mut sla) = tx.sla().find_by_ticket(ticket.id)? {
                if sla.mark_first_response() {
                    tx.sla().save(sla)?;
                    debug!(ticket = %ticket.id, "SLA first response met");
                }
            }
            MessageResponse::for_message(tx, &message)
        })
    }

    /// Lists the ticket's messages in ascending creation order
    ///
    /// Internal notes are included; filtering them by viewer is left to the
    /// boundary layer.
    pub fn list_messages(
        &self,
        ticket_id: TicketId,
        acting_user: UserId,
    ) -> Result<Vec<MessageResponse>> {
        self.store.transaction(|tx| {
            authorize_ticket_access(tx, ticket_id, acting_user)?;
            let messages = tx.messages().list_by_ticket(ticket_id)?;
            let mut responses = Vec::with_capacity(messages.len());
            for message in &messages {
                responses.push(MessageResponse::for_message(tx, message)?);
            }
            Ok(responses)
        })
    }
}
