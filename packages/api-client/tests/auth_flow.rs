//! Integration tests for the auth endpoints and the refresh interceptor.
//!
//! These run against a mock backend and verify:
//! 1. Bearer attachment from the stored credential
//! 2. One-shot refresh-and-retry on authorization failure
//! 3. Credential cleanup on refresh failure and on logout
//! 4. Session resolution order (storage first, then backend status)

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use waypoint_api::{ApiClient, ApiError, Credential, CredentialStore, MemoryStore, Platform};

fn credential(access_token: &str, user_id: &str) -> Credential {
    Credential {
        access_token: access_token.to_string(),
        refresh_token: Some("r1".to_string()),
        user_id: user_id.to_string(),
        need_phone_verification: false,
    }
}

/// Store with a seeded credential plus a client against the mock server.
fn client_with_credential(server: &MockServer) -> (Arc<MemoryStore>, ApiClient) {
    let store = Arc::new(MemoryStore::new());
    store.save(&credential("a1", "42")).unwrap();
    let client = ApiClient::new(server.uri(), store.clone(), Platform::Native);
    (store, client)
}

#[tokio::test]
async fn test_unauthorized_triggers_refresh_and_single_retry() {
    let server = MockServer::start().await;
    let (store, client) = client_with_credential(&server);

    Mock::given(method("GET"))
        .and(path("/api/trips"))
        .and(header("authorization", "Bearer a1"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .and(body_json(json!({ "refreshToken": "r1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "accessToken": "a2" })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/trips"))
        .and(header("authorization", "Bearer a2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let trips = client.list_trips().await.unwrap();
    assert!(trips.is_empty());

    let rotated = store.load().unwrap().unwrap();
    assert_eq!(rotated.access_token, "a2");
    assert_eq!(rotated.user_id, "42");
    assert_eq!(rotated.refresh_token.as_deref(), Some("r1"));
}

#[tokio::test]
async fn test_second_unauthorized_propagates_without_second_refresh() {
    let server = MockServer::start().await;
    let (_store, client) = client_with_credential(&server);

    // Both the original and the retried request fail.
    Mock::given(method("GET"))
        .and(path("/api/trips"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "accessToken": "a2" })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.list_trips().await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
}

#[tokio::test]
async fn test_refresh_failure_clears_credentials() {
    let server = MockServer::start().await;
    let (store, client) = client_with_credential(&server);

    Mock::given(method("GET"))
        .and(path("/api/trips"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.list_trips().await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
    assert!(store.load().unwrap().is_none(), "credential must be gone");
}

#[tokio::test]
async fn test_status_endpoint_is_never_refresh_retried() {
    let server = MockServer::start().await;
    let (_store, client) = client_with_credential(&server);

    Mock::given(method("GET"))
        .and(path("/api/auth/status"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "accessToken": "a2" })))
        .expect(0)
        .mount(&server)
        .await;

    let err = client.auth_status().await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
}

#[tokio::test]
async fn test_web_refresh_sends_cookies_csrf_and_no_body() {
    /// Browser-style store: in-memory record plus a CSRF cookie value.
    struct CsrfStore(MemoryStore);

    impl CredentialStore for CsrfStore {
        fn load(&self) -> Result<Option<Credential>, waypoint_api::StorageError> {
            self.0.load()
        }
        fn save(&self, c: &Credential) -> Result<(), waypoint_api::StorageError> {
            self.0.save(c)
        }
        fn clear(&self) -> Result<(), waypoint_api::StorageError> {
            self.0.clear()
        }
        fn csrf_token(&self) -> Option<String> {
            Some("x1".to_string())
        }
    }

    let server = MockServer::start().await;
    let store = Arc::new(CsrfStore(MemoryStore::new()));
    store.save(&credential("a1", "42")).unwrap();
    let client = ApiClient::new(server.uri(), store.clone(), Platform::Web);

    Mock::given(method("GET"))
        .and(path("/api/trips"))
        .and(header("authorization", "Bearer a1"))
        .and(header("X-XSRF-TOKEN", "x1"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    // Cookie-based rotation: POST with no body, CSRF header attached.
    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .and(header("X-XSRF-TOKEN", "x1"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "accessToken": "a2" })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/trips"))
        .and(header("authorization", "Bearer a2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    client.list_trips().await.unwrap();
    assert_eq!(store.load().unwrap().unwrap().access_token, "a2");
}

#[tokio::test]
async fn test_logout_clears_credentials_even_when_backend_fails() {
    let server = MockServer::start().await;
    let (store, client) = client_with_credential(&server);

    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(500).set_body_string("session store down"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.logout().await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500, .. }));
    assert!(store.load().unwrap().is_none(), "local cleanup must happen first");
}

#[tokio::test]
async fn test_logout_success_clears_credentials() {
    let server = MockServer::start().await;
    let (store, client) = client_with_credential(&server);

    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.logout().await.unwrap();
    assert!(store.load().unwrap().is_none());
}

#[tokio::test]
async fn test_resolve_session_prefers_persisted_credential() {
    let server = MockServer::start().await;
    let (_store, client) = client_with_credential(&server);

    // A local credential short-circuits the backend round trip.
    Mock::given(method("GET"))
        .and(path("/api/auth/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "isAuthenticated": false })))
        .expect(0)
        .mount(&server)
        .await;

    let status = client.resolve_session().await;
    assert!(status.is_authenticated);
    assert_eq!(status.user_id.as_deref(), Some("42"));
}

#[tokio::test]
async fn test_resolve_session_adopts_backend_status() {
    let server = MockServer::start().await;
    let store = Arc::new(MemoryStore::new());
    let client = ApiClient::new(server.uri(), store.clone(), Platform::Web);

    Mock::given(method("GET"))
        .and(path("/api/auth/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "isAuthenticated": true,
            "userId": "7",
            "needPhoneVerification": true,
            "accessToken": "t7"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let status = client.resolve_session().await;
    assert!(status.is_authenticated);
    assert_eq!(status.user_id.as_deref(), Some("7"));
    assert!(status.need_phone_verification);

    let persisted = store.load().unwrap().unwrap();
    assert_eq!(persisted.access_token, "t7");
    assert_eq!(persisted.user_id, "7");
    assert!(persisted.need_phone_verification);
}

#[tokio::test]
async fn test_resolve_session_network_failure_is_signed_out() {
    // Nothing listening on this port.
    let store = Arc::new(MemoryStore::new());
    let client = ApiClient::new("http://127.0.0.1:9", store, Platform::Web);

    let status = client.resolve_session().await;
    assert!(!status.is_authenticated);
    assert!(status.user_id.is_none());
}
