//! Shared helpers for `doppler-infra` integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use doppler_core::SessionStore;
use doppler_domain::AppSession;
use doppler_infra::{ApiClient, ApiClientConfig};
use wiremock::MockServer;

pub const JWT: &str = "header.payload.signature";
pub const ACCOUNT: &str = "ana@example.com";

/// Session store holding an authenticated session for [`ACCOUNT`].
pub fn authenticated_store() -> Arc<SessionStore> {
    Arc::new(SessionStore::with_session(AppSession::authenticated(JWT, ACCOUNT)))
}

/// API client pointed at the mock server.
pub fn api_client(server: &MockServer, store: Arc<SessionStore>) -> Arc<ApiClient> {
    let config = ApiClientConfig {
        base_url: server.uri(),
        timeout: Duration::from_secs(2),
        user_agent: Some("doppler-tests".to_string()),
    };
    Arc::new(ApiClient::new(config, store).expect("api client should build"))
}

/// Base URL nothing listens on.
pub fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}
