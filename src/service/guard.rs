//! Access guard: tenant isolation and assignee checks
//!
//! Every ticket-scoped operation calls [`authorize_ticket_access`] before
//! reading or mutating anything. The tenant check is non-negotiable and
//! role-independent; admins and agents are both organization-scoped, never
//! global.

use crate::core::{Ticket, TicketId, User, UserId};
use crate::error::{HelpdeskError, Result};
use crate::storage::StoreTx;
use tracing::warn;

/// Fetches a ticket and verifies the acting user may touch it
///
/// Fails with a not-found error when the ticket or the user does not exist,
/// and with [`HelpdeskError::AccessDenied`] when their organizations differ.
pub fn authorize_ticket_access(
    tx: &mut dyn StoreTx,
    ticket_id: TicketId,
    acting_user: UserId,
) -> Result<Ticket> {
    let ticket = tx.tickets().require(ticket_id)?;
    let user = tx.users().require(acting_user)?;
    if !user.belongs_to(ticket.organization) {
        warn!(
            ticket = %ticket_id,
            user = %acting_user,
            "cross-organization ticket access denied"
        );
        return Err(HelpdeskError::AccessDenied);
    }
    Ok(ticket)
}

/// Verifies a user may be assigned to a ticket
///
/// The second authorization layer, specific to assignment and applied after
/// the base tenant check: the target must have the agent role and belong to
/// the ticket's organization.
pub fn check_assignee(ticket: &Ticket, assignee: &User) -> Result<()> {
    if !assignee.role.can_be_assignee() {
        return Err(HelpdeskError::AssigneeNotAgent { id: assignee.id });
    }
    if !assignee.belongs_to(ticket.organization) {
        return Err(HelpdeskError::AssigneeOutsideOrganization { id: assignee.id });
    }
    Ok(())
}
