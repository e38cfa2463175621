//! In-memory transactional store
//!
//! The reference [`Store`] implementation. State lives behind a single
//! mutex; a transaction clones the state, runs the closure against the
//! clone and swaps it back in on success. An `Err` from the closure simply
//! drops the clone, which gives all-or-nothing semantics without any undo
//! log. Concurrent transactions serialize on the mutex, so every unit of
//! work observes a consistent snapshot.

use crate::core::{
    Organization, OrganizationId, SlaConfig, Ticket, TicketId, TicketMessage, User, UserId,
};
use crate::error::Result;
use crate::storage::repository::{
    MessageRepository, OrganizationRepository, SlaRepository, Store, StoreTx, TicketRepository,
    UserRepository,
};
use crate::storage::{Page, PageRequest, SortDirection, TicketFilter, TicketSortField};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Default, Clone)]
struct State {
    organizations: HashMap<OrganizationId, Organization>,
    users: HashMap<UserId, User>,
    tickets: HashMap<TicketId, Ticket>,
    // Append order doubles as the tie-break for equal timestamps
    messages: Vec<TicketMessage>,
    sla: HashMap<TicketId, SlaConfig>,
}

/// An in-memory [`Store`] suitable for tests and single-process deployments
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn transaction<R>(&self, f: impl FnOnce(&mut dyn StoreTx) -> Result<R>) -> Result<R> {
        let mut committed = self
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let mut working = committed.clone();
        let value = f(&mut MemoryTx {
            state: &mut working,
        })?;
        *committed = working;
        Ok(value)
    }
}

/// Transaction handle over a working copy of the store state
struct MemoryTx<'a> {
    state: &'a mut State,
}

impl StoreTx for MemoryTx<'_> {
    fn organizations(&mut self) -> &mut dyn OrganizationRepository {
        self
    }

    fn users(&mut self) -> &mut dyn UserRepository {
        self
    }

    fn tickets(&mut self) -> &mut dyn TicketRepository {
        self
    }

    fn messages(&mut self) -> &mut dyn MessageRepository {
        self
    }

    fn sla(&mut self) -> &mut dyn SlaRepository {
        self
    }
}

impl OrganizationRepository for MemoryTx<'_> {
    fn save(&mut self, organization: Organization) -> Result<Organization> {
        self.state
            .organizations
            .insert(organization.id, organization.clone());
        Ok(organization)
    }

    fn find_by_id(&mut self, id: OrganizationId) -> Result<Option<Organization>> {
        Ok(self.state.organizations.get(&id).cloned())
    }

    fn find_by_name(&mut self, name: &str) -> Result<Option<Organization>> {
        Ok(self
            .state
            .organizations
            .values()
            .find(|org| org.name == name)
            .cloned())
    }
}

impl UserRepository for MemoryTx<'_> {
    fn save(&mut self, user: User) -> Result<User> {
        self.state.users.insert(user.id, user.clone());
        Ok(user)
    }

    fn find_by_id(&mut self, id: UserId) -> Result<Option<User>> {
        Ok(self.state.users.get(&id).cloned())
    }

    fn find_by_email(&mut self, email: &str) -> Result<Option<User>> {
        Ok(self
            .state
            .users
            .values()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .cloned())
    }
}

impl TicketRepository for MemoryTx<'_> {
    fn save(&mut self, mut ticket: Ticket) -> Result<Ticket> {
        ticket.updated_at = Utc::now();
        self.state.tickets.insert(ticket.id, ticket.clone());
        Ok(ticket)
    }

    fn find_by_id(&mut self, id: TicketId) -> Result<Option<Ticket>> {
        Ok(self.state.tickets.get(&id).cloned())
    }

    fn find_by_organization(
        &mut self,
        organization: OrganizationId,
        filter: &TicketFilter,
        page: &PageRequest,
    ) -> Result<Page<Ticket>> {
        let mut matching: Vec<Ticket> = self
            .state
            .tickets
            .values()
            .filter(|ticket| ticket.organization == organization)
            .filter(|ticket| filter.status.is_none_or(|status| ticket.status == status))
            .filter(|ticket| {
                filter
                    .assigned_to
                    .is_none_or(|agent| ticket.assigned_to == Some(agent))
            })
            .cloned()
            .collect();

        matching.sort_by(|a, b| {
            let ordering = match page.sort_by {
                TicketSortField::CreatedAt => a.created_at.cmp(&b.created_at),
                TicketSortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
                TicketSortField::Priority => a.priority.cmp(&b.priority),
                TicketSortField::Status => a.status.cmp(&b.status),
            };
            // Secondary key keeps the order deterministic across runs
            let ordering = ordering.then_with(|| a.id.cmp(&b.id));
            match page.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let total = matching.len();
        let items: Vec<Ticket> = matching
            .into_iter()
            .skip(page.offset())
            .take(page.size)
            .collect();

        Ok(Page {
            items,
            page: page.page,
            size: page.size,
            total,
        })
    }
}

impl MessageRepository for MemoryTx<'_> {
    fn save(&mut self, message: TicketMessage) -> Result<TicketMessage> {
        self.state.messages.push(message.clone());
        Ok(message)
    }

    fn list_by_ticket(&mut self, ticket: TicketId) -> Result<Vec<TicketMessage>> {
        let mut messages: Vec<TicketMessage> = self
            .state
            .messages
            .iter()
            .filter(|message| message.ticket == ticket)
            .cloned()
            .collect();
        // Stable sort: equal timestamps keep append order
        messages.sort_by_key(|message| message.created_at);
        Ok(messages)
    }
}

impl SlaRepository for MemoryTx<'_> {
    fn save(&mut self, sla: SlaConfig) -> Result<SlaConfig> {
        self.state.sla.insert(sla.ticket, sla.clone());
        Ok(sla)
    }

    fn find_by_ticket(&mut self, ticket: TicketId) -> Result<Option<SlaConfig>> {
        Ok(self.state.sla.get(&ticket).cloned())
    }
}
