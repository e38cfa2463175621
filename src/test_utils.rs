//! Test utilities for helpdesk
//!
//! This module provides common test fixtures and utilities to reduce
//! duplication in test code across the codebase.

#![cfg(test)]

use crate::core::{Organization, User, UserBuilder, UserRole};
use crate::service::TicketService;
use crate::storage::{MemoryStore, Store, StoreTx};
use std::sync::Arc;

/// Test fixture: one organization with an admin, sharing a store
///
/// Create a second tenant on the same store with [`TestTenant::with_store`]
/// to exercise tenant-isolation paths.
pub struct TestTenant {
    pub store: Arc<MemoryStore>,
    pub organization: Organization,
    pub admin: User,
}

impl TestTenant {
    /// Creates a fresh store with one organization and an admin user
    pub fn new(name: &str) -> Self {
        Self::with_store(Arc::new(MemoryStore::new()), name)
    }

    /// Creates an organization and admin on an existing store
    pub fn with_store(store: Arc<MemoryStore>, name: &str) -> Self {
        let (organization, admin) = store
            .transaction(|tx| {
                let organization = tx.organizations().save(Organization::new(name))?;
                let admin = tx.users().save(
                    UserBuilder::new()
                        .email(format!("admin@{}.test", name.to_lowercase()))
                        .full_name(format!("{name} Admin"))
                        .role(UserRole::Admin)
                        .organization(organization.id)
                        .build(),
                )?;
                Ok((organization, admin))
            })
            .expect("Failed to seed tenant");
        Self {
            store,
            organization,
            admin,
        }
    }

    /// Adds an active agent to this tenant
    pub fn add_agent(&self, email: &str) -> User {
        self.add_user(email, UserRole::Agent)
    }

    /// Adds an active user with the given role to this tenant
    pub fn add_user(&self, email: &str, role: UserRole) -> User {
        self.store
            .transaction(|tx: &mut dyn StoreTx| {
                tx.users().save(
                    UserBuilder::new()
                        .email(email)
                        .full_name("Test User")
                        .role(role)
                        .organization(self.organization.id)
                        .build(),
                )
            })
            .expect("Failed to add user")
    }

    /// A ticket service over this tenant's store
    pub fn ticket_service(&self) -> TicketService<Arc<MemoryStore>> {
        TicketService::new(Arc::clone(&self.store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenant_fixture_seeds_admin() {
        let tenant = TestTenant::new("Acme");
        assert_eq!(tenant.admin.role, UserRole::Admin);
        assert_eq!(tenant.admin.organization, tenant.organization.id);
    }

    #[test]
    fn test_two_tenants_share_one_store() {
        let first = TestTenant::new("Acme");
        let second = TestTenant::with_store(Arc::clone(&first.store), "Globex");
        assert_ne!(first.organization.id, second.organization.id);
    }
}
