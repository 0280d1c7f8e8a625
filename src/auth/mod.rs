//! Remote login and the repository tying it to session storage.

pub mod credentials;
pub mod gateway;
pub mod repository;
pub mod resource;

pub use credentials::{Credentials, LoginPayload};
pub use gateway::{login_stream, AuthGateway, HttpAuthGateway};
pub use repository::AuthRepository;
pub use resource::{LoginOutcome, Outcome, Resource, FALLBACK_ERROR_MESSAGE};
