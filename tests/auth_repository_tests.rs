mod auth_support;

use std::sync::Arc;

use futures::StreamExt;
use pretty_assertions::assert_eq;
use secondhand::auth::{AuthRepository, LoginPayload, Outcome, Resource};
use secondhand::error::SecondhandError;
use secondhand::navigation::{start_destination, StartDestination};
use secondhand::session::{FileSessionStore, MemorySessionStore, SessionStore};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use auth_support::{credentials, http_gateway, payload, StubGateway, LOGIN_PATH};

#[tokio::test]
async fn login_does_not_persist_on_its_own() {
    let gateway = Arc::new(StubGateway::new(Outcome::Success(payload("token-1"))));
    let store = Arc::new(MemorySessionStore::new());
    let repo = AuthRepository::new(gateway.clone(), store.clone());

    let outcome = repo.login(&credentials()).await;

    assert!(outcome.is_success());
    assert_eq!(gateway.calls(), 1);
    assert_eq!(gateway.last_credentials(), Some(credentials()));
    assert!(!repo.has_logged_in_user().unwrap());
    assert_eq!(store.token().unwrap(), None);
}

#[tokio::test]
async fn successful_login_then_persist_marks_user_logged_in() {
    let gateway = Arc::new(StubGateway::new(Outcome::Success(payload("token-1"))));
    let repo = AuthRepository::new(gateway, Arc::new(MemorySessionStore::new()));

    let payload = repo
        .login(&credentials())
        .await
        .into_success()
        .expect("success");
    let session = repo.set_user_logged_in(&payload).unwrap();

    assert!(session.is_logged_in());
    assert_eq!(session.name(), Some("Ana"));
    assert!(repo.has_logged_in_user().unwrap());
    assert_eq!(repo.access_token().unwrap().as_deref(), Some("token-1"));
}

#[tokio::test]
async fn stream_through_repository_has_single_terminal_state() {
    let gateway = Arc::new(StubGateway::new(Outcome::error("Invalid credentials")));
    let repo = AuthRepository::new(gateway, Arc::new(MemorySessionStore::new()));

    let states: Vec<_> = repo.login_stream(credentials()).collect().await;

    assert_eq!(states.iter().filter(|s| s.is_loading()).count(), 1);
    assert_eq!(states.iter().filter(|s| s.is_terminal()).count(), 1);
    assert!(states[0].is_loading());
    assert!(matches!(
        &states[1],
        Resource::Error { code: None, message } if message == "Invalid credentials"
    ));
}

#[tokio::test]
async fn empty_access_token_is_refused() {
    let repo = AuthRepository::new(
        Arc::new(StubGateway::new(Outcome::fallback())),
        Arc::new(MemorySessionStore::new()),
    );
    let empty = LoginPayload {
        access_token: "  ".to_string(),
        name: None,
        email: None,
    };

    let err = repo.set_user_logged_in(&empty).unwrap_err();

    assert!(matches!(err, SecondhandError::InvalidArgument(_)));
    assert!(!repo.has_logged_in_user().unwrap());
}

#[tokio::test]
async fn logout_clears_session() {
    let repo = AuthRepository::new(
        Arc::new(StubGateway::new(Outcome::fallback())),
        Arc::new(MemorySessionStore::new()),
    );
    repo.set_user_logged_in(&payload("token-1")).unwrap();

    repo.logout().unwrap();

    assert!(!repo.has_logged_in_user().unwrap());
    assert_eq!(repo.access_token().unwrap(), None);
}

#[tokio::test]
async fn session_store_exposes_persisted_session() {
    let repo = AuthRepository::new(
        Arc::new(StubGateway::new(Outcome::fallback())),
        Arc::new(MemorySessionStore::new()),
    );
    repo.set_user_logged_in(&payload("token-1")).unwrap();

    let session = repo.session_store().session().unwrap().expect("session");

    assert_eq!(session.access_token(), "token-1");
    assert_eq!(session.email(), Some("user1@example.com"));
    assert_eq!(
        start_destination(repo.session_store().as_ref()).unwrap(),
        StartDestination::Home
    );
}

#[tokio::test]
async fn http_login_persists_to_file_store() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "name": "Ana",
            "email": "user1@example.com",
            "access_token": "token-http"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let repo = AuthRepository::new(
        http_gateway(&server),
        Arc::new(FileSessionStore::new(dir.path())),
    );

    let payload = repo
        .login(&credentials())
        .await
        .into_success()
        .expect("success");
    repo.set_user_logged_in(&payload).unwrap();

    let reopened = FileSessionStore::new(dir.path());
    assert_eq!(reopened.token().unwrap().as_deref(), Some("token-http"));
    assert!(reopened.has_logged_in_user().unwrap());
}
