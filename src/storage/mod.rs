//! Storage layer: repository contracts and the in-memory store
//!
//! The engine never talks to persistence directly; it goes through the
//! repository traits in [`repository`], inside a [`Store::transaction`]
//! unit of work. [`MemoryStore`] is the in-crate implementation; a SQL
//! store would implement the same traits.

mod memory;
mod page;
pub mod repository;

pub use memory::MemoryStore;
pub use page::{Page, PageRequest, SortDirection, TicketFilter, TicketSortField};
pub use repository::{
    MessageRepository, OrganizationRepository, SlaRepository, Store, StoreTx, TicketRepository,
    UserRepository,
};
