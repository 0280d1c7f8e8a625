//! Persisted session state: the access token and logged-in marker.

pub mod error;
pub mod model;
pub mod store;

pub use error::SessionError;
pub use model::Session;
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
