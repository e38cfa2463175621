//! Service layer: the operations exposed to the boundary
//!
//! Every operation takes structured request fields plus an
//! already-authenticated acting user id, runs the access guard and the
//! mutation inside one store transaction, and returns a response view or a
//! typed error. Session and token handling live entirely outside this
//! crate; the engine never sees a credential except through
//! [`auth::CredentialHasher`].

pub mod auth;
pub mod guard;
pub mod requests;
pub mod responses;
pub mod tickets;

pub use auth::{Argon2Hasher, AuthService, CredentialHasher, TokenIssuer};
pub use guard::{authorize_ticket_access, check_assignee};
pub use requests::{
    AddMessageRequest, AssignTicketRequest, CreateTicketRequest, LoginRequest, SignupRequest,
    TicketQuery, UpdateStatusRequest,
};
pub use responses::{AuthResponse, MessageResponse, SlaResponse, TicketResponse, UserResponse};
pub use tickets::TicketService;
