use std::sync::Arc;

use futures::stream::BoxStream;

use super::credentials::{Credentials, LoginPayload};
use super::gateway::{login_stream, AuthGateway, HttpAuthGateway};
use super::resource::{LoginOutcome, Resource};
use crate::config::ClientConfig;
use crate::error::{Result, SecondhandError};
use crate::session::{FileSessionStore, Session, SessionStore};

/// Caller-facing auth facade over a gateway and a session store.
///
/// Logging in never persists anything on its own: on success the caller
/// hands the payload to [`AuthRepository::set_user_logged_in`].
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use secondhand::auth::{AuthRepository, Credentials, HttpAuthGateway};
/// use secondhand::session::MemorySessionStore;
///
/// # async fn example() -> secondhand::error::Result<()> {
/// let repo = AuthRepository::new(
///     Arc::new(HttpAuthGateway::new("https://api.example.com")),
///     Arc::new(MemorySessionStore::new()),
/// );
/// if let Some(payload) = repo.login(&Credentials::new("user1", "secret")).await.into_success() {
///     repo.set_user_logged_in(&payload)?;
/// }
/// # Ok(())
/// # }
/// ```
pub struct AuthRepository {
    gateway: Arc<dyn AuthGateway>,
    store: Arc<dyn SessionStore>,
}

impl AuthRepository {
    pub fn new(gateway: Arc<dyn AuthGateway>, store: Arc<dyn SessionStore>) -> Self {
        Self { gateway, store }
    }

    /// HTTP gateway plus file-backed store, both taken from `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let gateway = HttpAuthGateway::from_config(config)?;
        let store = FileSessionStore::new(config.session_dir());
        Ok(Self::new(Arc::new(gateway), Arc::new(store)))
    }

    pub async fn login(&self, credentials: &Credentials) -> LoginOutcome {
        self.gateway.login(credentials).await
    }

    pub fn login_stream(
        &self,
        credentials: Credentials,
    ) -> BoxStream<'static, Resource<LoginPayload>> {
        login_stream(self.gateway.clone(), credentials)
    }

    /// Persist the session carried by a successful login.
    pub fn set_user_logged_in(&self, payload: &LoginPayload) -> Result<Session> {
        let session = Session::new(payload.access_token.clone())
            .with_user(payload.name.clone(), payload.email.clone());
        if !session.is_logged_in() {
            return Err(SecondhandError::InvalidArgument(
                "login payload carries an empty access token".to_string(),
            ));
        }
        self.store.set_session(&session)?;
        tracing::debug!(email = ?session.email(), "user session persisted");
        Ok(session)
    }

    pub fn has_logged_in_user(&self) -> Result<bool> {
        Ok(self.store.has_logged_in_user()?)
    }

    pub fn access_token(&self) -> Result<Option<String>> {
        Ok(self.store.token()?)
    }

    pub fn logout(&self) -> Result<()> {
        self.store.clear()?;
        tracing::debug!("user session cleared");
        Ok(())
    }

    pub fn session_store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }
}
