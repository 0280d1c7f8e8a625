use super::credentials::LoginPayload;

/// Message used whenever the server gives nothing better to show.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

/// Observable state of a single request.
///
/// `Loading` is always observed first, followed by exactly one terminal
/// state (`Success` or `Error`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource<T> {
    Loading,
    Success(T),
    Error { code: Option<u16>, message: String },
}

impl<T> Resource<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }
}

/// Terminal state of a request. Unlike [`Resource`] it has no `Loading`
/// variant, so an awaited call always resolves to a final answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success(T),
    Error { code: Option<u16>, message: String },
}

impl<T> Outcome<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            code: None,
            message: message.into(),
        }
    }

    /// The generic error emitted when no server message is available.
    pub fn fallback() -> Self {
        Self::error(FALLBACK_ERROR_MESSAGE)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Error { message, .. } => Some(message),
        }
    }

    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Error { .. } => None,
        }
    }
}

impl<T> From<Outcome<T>> for Resource<T> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => Self::Success(value),
            Outcome::Error { code, message } => Self::Error { code, message },
        }
    }
}

pub type LoginOutcome = Outcome<LoginPayload>;
