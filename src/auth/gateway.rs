use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::BoxStream;
use reqwest::StatusCode;

use super::credentials::{Credentials, LoginPayload};
use super::resource::{LoginOutcome, Outcome, Resource};
use crate::config::ClientConfig;
use crate::error::Result;

/// Remote login endpoint.
///
/// Implementations never fail with `Err`: every failure is reported as
/// [`Outcome::Error`] so callers always get exactly one terminal state.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> LoginOutcome;
}

/// Observe a login attempt as `Loading` followed by one terminal state.
///
/// Nothing happens until the stream is polled; dropping it cancels the
/// in-flight request.
pub fn login_stream(
    gateway: Arc<dyn AuthGateway>,
    credentials: Credentials,
) -> BoxStream<'static, Resource<LoginPayload>> {
    Box::pin(async_stream::stream! {
        yield Resource::Loading;
        let outcome = gateway.login(&credentials).await;
        yield Resource::from(outcome);
    })
}

/// [`AuthGateway`] over HTTP: `POST`s the credentials as JSON to the login URL.
///
/// # Example
/// ```no_run
/// use secondhand::auth::{AuthGateway, Credentials, HttpAuthGateway};
///
/// # async fn example() {
/// let gateway = HttpAuthGateway::new("https://api.example.com");
/// let outcome = gateway.login(&Credentials::new("user1", "secret")).await;
/// # }
/// ```
pub struct HttpAuthGateway {
    client: reqwest::Client,
    login_url: String,
}

impl HttpAuthGateway {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            login_url: ClientConfig::new().with_base_url(base_url).login_url(),
        }
    }

    /// Build a gateway with the configured login URL and request timeout.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            client,
            login_url: config.login_url(),
        })
    }

    pub fn with_login_url(mut self, url: impl Into<String>) -> Self {
        self.login_url = url.into();
        self
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, credentials: &Credentials) -> LoginOutcome {
        let response = match self
            .client
            .post(&self.login_url)
            .header("Accept", "application/json")
            .json(credentials)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(url = %self.login_url, error = %err, "login request failed");
                return Outcome::fallback();
            }
        };

        let status = response.status();
        match response.text().await {
            Ok(body) => translate_response(status, &body),
            Err(err) => {
                tracing::warn!(%status, error = %err, "login response body unreadable");
                Outcome::fallback()
            }
        }
    }
}

/// Map a login HTTP response to its terminal outcome.
fn translate_response(status: StatusCode, body: &str) -> LoginOutcome {
    if status.is_success() {
        return match serde_json::from_str::<LoginPayload>(body) {
            Ok(payload) => {
                tracing::debug!(%status, "login succeeded");
                Outcome::Success(payload)
            }
            Err(err) => {
                tracing::warn!(%status, error = %err, "login response body malformed");
                Outcome::fallback()
            }
        };
    }

    tracing::warn!(%status, "login request rejected");
    match extract_error_message(body) {
        Some(message) => Outcome::error(message),
        None => Outcome::fallback(),
    }
}

/// Pull the `message` string out of a JSON error body.
fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}
