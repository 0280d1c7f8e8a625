#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use secondhand::auth::{AuthGateway, Credentials, HttpAuthGateway, LoginOutcome, LoginPayload};
use wiremock::MockServer;

pub const LOGIN_PATH: &str = "/auth/login";

/// Gateway returning a canned outcome and recording what it was asked.
pub struct StubGateway {
    outcome: LoginOutcome,
    calls: AtomicUsize,
    last_credentials: Mutex<Option<Credentials>>,
}

impl StubGateway {
    pub fn new(outcome: LoginOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_credentials: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_credentials(&self) -> Option<Credentials> {
        self.last_credentials
            .lock()
            .expect("credentials lock poisoned")
            .clone()
    }
}

#[async_trait]
impl AuthGateway for StubGateway {
    async fn login(&self, credentials: &Credentials) -> LoginOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_credentials
            .lock()
            .expect("credentials lock poisoned") = Some(credentials.clone());
        self.outcome.clone()
    }
}

pub fn http_gateway(server: &MockServer) -> Arc<HttpAuthGateway> {
    Arc::new(
        HttpAuthGateway::new(&server.uri())
            .with_login_url(format!("{}{LOGIN_PATH}", server.uri())),
    )
}

pub fn payload(access_token: &str) -> LoginPayload {
    LoginPayload {
        access_token: access_token.to_string(),
        name: Some("Ana".to_string()),
        email: Some("user1@example.com".to_string()),
    }
}

pub fn credentials() -> Credentials {
    Credentials::new("user1", "bad")
}
