use thiserror::Error;

/// Failures reading or writing persisted session state.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Inconsistent session: logged_in={logged_in} but has_token={has_token}")]
    Inconsistent { logged_in: bool, has_token: bool },
    #[error("Unsupported session file version {0}")]
    UnsupportedVersion(u32),
}

impl From<std::io::Error> for SessionError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

impl From<toml::de::Error> for SessionError {
    fn from(error: toml::de::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

impl From<toml::ser::Error> for SessionError {
    fn from(error: toml::ser::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}
