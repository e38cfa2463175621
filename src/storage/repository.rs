//! Repository traits for entity storage
//!
//! These traits define the contract the persistence collaborator must
//! satisfy, allowing for different storage implementations. All of them
//! operate on a transaction handle obtained from [`Store::transaction`]:
//! everything done inside one closure commits or rolls back as a unit, so
//! multi-step operations (ticket plus SLA row, guard-check plus mutation)
//! can never partially apply.

use crate::core::{
    Organization, OrganizationId, SlaConfig, Ticket, TicketId, TicketMessage, User, UserId,
};
use crate::error::{HelpdeskError, Result};
use crate::storage::{Page, PageRequest, TicketFilter};

/// Repository for tenant organizations
pub trait OrganizationRepository {
    /// Saves an organization, inserting or replacing by id
    fn save(&mut self, organization: Organization) -> Result<Organization>;

    /// Looks up an organization by id
    fn find_by_id(&mut self, id: OrganizationId) -> Result<Option<Organization>>;

    /// Looks up an organization by its unique name
    fn find_by_name(&mut self, name: &str) -> Result<Option<Organization>>;

    /// Looks up an organization by id, failing if absent
    fn require(&mut self, id: OrganizationId) -> Result<Organization> {
        self.find_by_id(id)?
            .ok_or(HelpdeskError::OrganizationNotFound { id })
    }
}

/// Repository for user accounts
pub trait UserRepository {
    /// Saves a user, inserting or replacing by id
    fn save(&mut self, user: User) -> Result<User>;

    /// Looks up a user by id
    fn find_by_id(&mut self, id: UserId) -> Result<Option<User>>;

    /// Looks up a user by email address (case-insensitive)
    fn find_by_email(&mut self, email: &str) -> Result<Option<User>>;

    /// Returns true if the email address is already registered
    fn email_taken(&mut self, email: &str) -> Result<bool> {
        Ok(self.find_by_email(email)?.is_some())
    }

    /// Looks up a user by id, failing if absent
    fn require(&mut self, id: UserId) -> Result<User> {
        self.find_by_id(id)?.ok_or(HelpdeskError::UserNotFound { id })
    }
}

/// Repository for tickets
pub trait TicketRepository {
    /// Saves a ticket, bumping its `updated_at` timestamp
    ///
    /// Returns the ticket as stored, so callers observe the bump.
    fn save(&mut self, ticket: Ticket) -> Result<Ticket>;

    /// Looks up a ticket by id
    fn find_by_id(&mut self, id: TicketId) -> Result<Option<Ticket>>;

    /// Lists tickets of one organization, filtered, sorted and paged
    ///
    /// The organization scope is mandatory: this is the only listing entry
    /// point, so no query can ever span tenants.
    fn find_by_organization(
        &mut self,
        organization: OrganizationId,
        filter: &TicketFilter,
        page: &PageRequest,
    ) -> Result<Page<Ticket>>;

    /// Looks up a ticket by id, failing if absent
    fn require(&mut self, id: TicketId) -> Result<Ticket> {
        self.find_by_id(id)?
            .ok_or(HelpdeskError::TicketNotFound { id })
    }
}

/// Repository for ticket messages
pub trait MessageRepository {
    /// Appends a message
    fn save(&mut self, message: TicketMessage) -> Result<TicketMessage>;

    /// Lists all messages of a ticket in ascending creation order
    ///
    /// Ordering is stable: messages with equal timestamps keep their
    /// insertion order.
    fn list_by_ticket(&mut self, ticket: TicketId) -> Result<Vec<TicketMessage>>;
}

/// Repository for per-ticket SLA rows
pub trait SlaRepository {
    /// Saves an SLA row, inserting or replacing by ticket
    fn save(&mut self, sla: SlaConfig) -> Result<SlaConfig>;

    /// Looks up the SLA row of a ticket
    fn find_by_ticket(&mut self, ticket: TicketId) -> Result<Option<SlaConfig>>;
}

/// A transaction handle giving access to every repository
///
/// Obtained from [`Store::transaction`]; all repositories returned from one
/// handle see and mutate the same uncommitted state.
pub trait StoreTx {
    fn organizations(&mut self) -> &mut dyn OrganizationRepository;
    fn users(&mut self) -> &mut dyn UserRepository;
    fn tickets(&mut self) -> &mut dyn TicketRepository;
    fn messages(&mut self) -> &mut dyn MessageRepository;
    fn sla(&mut self) -> &mut dyn SlaRepository;
}

/// The persistence collaborator: a transactional store
///
/// `transaction` runs the closure against a [`StoreTx`] atomically. If the
/// closure returns `Ok` the writes commit; on `Err` nothing it did is
/// visible afterwards. Concurrent transactions on the same store serialize;
/// the core logic itself is stateless and holds no locks.
pub trait Store: Send + Sync {
    /// Runs `f` as one atomic unit of work
    fn transaction<R>(&self, f: impl FnOnce(&mut dyn StoreTx) -> Result<R>) -> Result<R>
    where
        Self: Sized;
}

impl<S: Store> Store for std::sync::Arc<S> {
    fn transaction<R>(&self, f: impl FnOnce(&mut dyn StoreTx) -> Result<R>) -> Result<R> {
        (**self).transaction(f)
    }
}

impl<S: Store> Store for &S {
    fn transaction<R>(&self, f: impl FnOnce(&mut dyn StoreTx) -> Result<R>) -> Result<R> {
        (**self).transaction(f)
    }
}
