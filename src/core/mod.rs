//! Core domain model for the helpdesk engine
//!
//! Entities, identifiers and the pure rules that govern them: the ticket
//! status lifecycle, the SLA policy table and the tenant/role structure.
//! Everything here is persistence-agnostic; durability lives behind the
//! repository traits in [`crate::storage`].

mod builders;
mod id;
mod message;
mod organization;
mod priority;
mod sla;
mod status;
mod ticket;
mod user;

pub use builders::{TicketBuilder, UserBuilder};
pub use id::{MessageId, OrganizationId, SlaConfigId, TicketId, UserId};
pub use message::TicketMessage;
pub use organization::Organization;
pub use priority::TicketPriority;
pub use sla::{SlaConfig, SlaPolicy};
pub use status::TicketStatus;
pub use ticket::{MAX_TITLE_LENGTH, Ticket};
pub use user::{User, UserRole};
