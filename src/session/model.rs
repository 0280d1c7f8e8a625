use std::fmt;

use super::error::SessionError;

/// Persisted proof of authentication.
///
/// The logged-in flag always agrees with token presence: a session is
/// logged in exactly when its access token is non-blank. Both constructors
/// uphold this, so a `Session` value can never disagree with itself.
///
/// # Example
/// ```
/// use secondhand::session::Session;
///
/// let session = Session::new("token-123").with_user(Some("Ana".into()), None);
/// assert!(session.is_logged_in());
/// assert_eq!(session.access_token(), "token-123");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    access_token: String,
    logged_in: bool,
    name: Option<String>,
    email: Option<String>,
}

impl Session {
    pub fn new(access_token: impl Into<String>) -> Self {
        let access_token = access_token.into();
        let logged_in = has_token(&access_token);
        Self {
            access_token,
            logged_in,
            name: None,
            email: None,
        }
    }

    /// Rebuild a session from separately stored token and flag.
    pub fn from_parts(
        access_token: impl Into<String>,
        logged_in: bool,
    ) -> Result<Self, SessionError> {
        let access_token = access_token.into();
        let has_token = has_token(&access_token);
        if has_token != logged_in {
            return Err(SessionError::Inconsistent {
                logged_in,
                has_token,
            });
        }
        Ok(Self {
            access_token,
            logged_in,
            name: None,
            email: None,
        })
    }

    pub fn with_user(mut self, name: Option<String>, email: Option<String>) -> Self {
        self.name = name;
        self.email = email;
        self
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("logged_in", &self.logged_in)
            .field("name", &self.name)
            .field("email", &self.email)
            .finish()
    }
}

fn has_token(token: &str) -> bool {
    !token.trim().is_empty()
}
