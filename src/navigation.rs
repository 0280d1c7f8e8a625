//! Start-screen decision driven by the persisted session.

use crate::session::{SessionError, SessionStore};

/// Where the app should open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartDestination {
    Login,
    Home,
}

impl StartDestination {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Home => "home",
        }
    }
}

/// `Home` when a logged-in session is stored, `Login` otherwise.
pub fn start_destination(store: &dyn SessionStore) -> Result<StartDestination, SessionError> {
    if store.has_logged_in_user()? {
        Ok(StartDestination::Home)
    } else {
        Ok(StartDestination::Login)
    }
}
