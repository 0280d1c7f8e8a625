//! Error types for the secondhand client.

use thiserror::Error;

use crate::session::SessionError;

/// Primary error type for library operations that can fail.
///
/// Login failures are not represented here: the gateway reports them as
/// [`LoginOutcome::Error`](crate::auth::LoginOutcome::Error) values.
#[derive(Error, Debug)]
pub enum SecondhandError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Session storage error: {0}")]
    Session(#[from] SessionError),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl SecondhandError {
    /// Whether the user can fix this by editing configuration or the environment.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::InvalidArgument(_))
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SecondhandError>;
