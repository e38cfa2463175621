//! helpdesk - a multi-tenant support-ticket engine
//!
//! This crate implements the core of a support-ticket tracker:
//! - The ticket status lifecycle (open, in-progress, resolved, closed) with
//!   its terminal-state guard and lifecycle timestamps
//! - SLA deadline computation from ticket priority and first-response
//!   tracking
//! - Tenant isolation: every ticket operation is gated on the acting user
//!   belonging to the ticket's organization
//! - Signup/login with role assignment, behind pluggable hashing and token
//!   collaborators
//!
//! HTTP routing, token wire formats and SQL schemas live outside this
//! crate. Persistence is consumed through the repository traits in
//! [`storage`]; [`storage::MemoryStore`] is the in-crate implementation.
//!
//! # Concurrency
//!
//! The engine itself is stateless: every operation is a self-contained unit
//! of work wrapped in a [`storage::Store::transaction`], so services can be
//! shared freely across threads. Atomicity and isolation are the store's
//! contract, not the caller's.
//!
//! # Example
//!
//! ```rust,ignore
//! use helpdesk::core::TicketPriority;
//! use helpdesk::service::{CreateTicketRequest, TicketService};
//! use helpdesk::storage::MemoryStore;
//!
//! let service = TicketService::new(MemoryStore::new());
//! let ticket = service.create_ticket(
//!     &CreateTicketRequest {
//!         title: "Login broken".into(),
//!         description: "500 on submit".into(),
//!         priority: TicketPriority::Urgent,
//!     },
//!     acting_user_id,
//! )?;
//! ```

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod core;
pub mod error;
pub mod service;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{ErrorKind, HelpdeskError, Result};
