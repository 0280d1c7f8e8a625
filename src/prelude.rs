//! Convenience re-exports for common use.

pub use crate::auth::{
    AuthGateway, AuthRepository, Credentials, HttpAuthGateway, LoginOutcome, LoginPayload,
    Outcome, Resource,
};
pub use crate::config::ClientConfig;
pub use crate::error::{Result, SecondhandError};
pub use crate::navigation::{start_destination, StartDestination};
pub use crate::session::{FileSessionStore, MemorySessionStore, Session, SessionStore};
