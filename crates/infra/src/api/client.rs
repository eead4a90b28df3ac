//! Authenticated Doppler API client
//!
//! Every request first resolves the connection data from the session
//! provider. A missing or unauthenticated session fails before any I/O;
//! everything after that point is reported through the result envelope.

use std::sync::Arc;
use std::time::Duration;

use doppler_core::SessionProvider;
use doppler_domain::{
    resolve_connection_data, ApiConfig, ApiFailure, ApiResult, ClientResult, ConnectionData,
    DopplerError, SessionUnavailable, TransportError, TransportErrorKind,
};
use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Method;
use tracing::{debug, warn};
use url::Url;

use super::payloads::WirePayload;
use super::response::read_envelope;
use crate::config::parse_base_url;
use crate::errors::transport_error;
use crate::http::HttpClient;

/// Configuration for API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL for API (e.g., "https://restapi.fromdoppler.com")
    pub base_url: String,
    /// Timeout for API requests
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
            user_agent: config.user_agent.clone(),
        }
    }
}

/// HTTP client bound to the Doppler API and the current session.
pub struct ApiClient {
    http: HttpClient,
    base_url: Url,
    session: Arc<dyn SessionProvider>,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns `DopplerError::Config` if the base URL is invalid or the
    /// HTTP client cannot be built.
    pub fn new(
        config: ApiClientConfig,
        session: Arc<dyn SessionProvider>,
    ) -> Result<Self, DopplerError> {
        let base_url = parse_base_url(&config.base_url)?;
        let http = json_http_client(config.timeout, config.user_agent.as_deref())?;
        Ok(Self { http, base_url, session })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Connection data of the current session snapshot.
    pub fn connection_data(&self) -> Result<ConnectionData, SessionUnavailable> {
        let session = self.session.current();
        resolve_connection_data(session.as_ref()).inspect_err(|reason| {
            warn!(%reason, "refusing Doppler API request");
        })
    }

    /// `GET /accounts/{account}/{resource...}`
    pub async fn get_account_resource<P: WirePayload>(
        &self,
        resource: &[&str],
    ) -> ClientResult<P::Domain> {
        let connection = self.connection_data()?;
        let mut segments = vec!["accounts", connection.user_account.as_str()];
        segments.extend_from_slice(resource);
        Ok(self.send_get::<P>(&connection, &segments).await)
    }

    /// `GET /{resource...}` with the session's credentials.
    pub async fn get_resource<P: WirePayload>(&self, resource: &[&str]) -> ClientResult<P::Domain> {
        let connection = self.connection_data()?;
        Ok(self.send_get::<P>(&connection, resource).await)
    }

    async fn send_get<P: WirePayload>(
        &self,
        connection: &ConnectionData,
        segments: &[&str],
    ) -> ApiResult<P::Domain> {
        let url = join_segments(&self.base_url, segments);
        let authorization = HeaderValue::from_str(&connection.authorization_header())
            .map_err(|err| ApiFailure::Transport(invalid_header(err)))?;

        let request = self.http.request(Method::GET, url).header(AUTHORIZATION, authorization);
        let response = self
            .http
            .send(request)
            .await
            .map_err(|err| ApiFailure::Transport(transport_error(&err)))?;

        let outcome = read_envelope::<P>(response).await;
        debug!(ok = outcome.is_ok(), "Doppler API request finished");
        outcome
    }
}

/// HTTP client that asks for JSON.
pub(crate) fn json_http_client(
    timeout: Duration,
    user_agent: Option<&str>,
) -> Result<HttpClient, DopplerError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut builder = HttpClient::builder().timeout(timeout).default_headers(headers);
    if let Some(agent) = user_agent {
        builder = builder.user_agent(agent);
    }
    builder.build()
}

/// Append path segments to `base`, percent-encoding each one.
pub(crate) fn join_segments(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

fn invalid_header(err: InvalidHeaderValue) -> TransportError {
    TransportError::new(TransportErrorKind::Request, format!("invalid authorization header: {err}"))
}

#[cfg(test)]
mod tests {
    use doppler_core::SessionStore;
    use doppler_domain::AppSession;

    use super::*;

    fn client(base_url: &str) -> Result<ApiClient, DopplerError> {
        let config = ApiClientConfig {
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(5),
            user_agent: None,
        };
        ApiClient::new(config, Arc::new(SessionStore::new()))
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert!(matches!(client("not a url"), Err(DopplerError::Config(_))));
        assert!(client("https://restapi.fromdoppler.com").is_ok());
    }

    #[test]
    fn join_segments_keeps_base_path() {
        let base = Url::parse("https://api.example.test/v2/").unwrap();
        let url = join_segments(&base, &["accounts", "ana@example.com", "lists", "7"]);
        assert_eq!(url.as_str(), "https://api.example.test/v2/accounts/ana@example.com/lists/7");
    }

    #[test]
    fn join_segments_escapes_separators() {
        let base = Url::parse("https://api.example.test").unwrap();
        let url = join_segments(&base, &["subscribers", "a/b?c#d"]);
        assert_eq!(url.path(), "/subscribers/a%2Fb%3Fc%23d");
    }

    #[test]
    fn connection_data_requires_authenticated_session() {
        let store = Arc::new(SessionStore::new());
        let config = ApiClientConfig {
            base_url: "https://api.example.test".into(),
            timeout: Duration::from_secs(5),
            user_agent: None,
        };
        let api = ApiClient::new(config, store.clone()).unwrap();

        assert_eq!(api.connection_data().unwrap_err(), SessionUnavailable::Missing);

        store.set(AppSession::authenticated("jwt", "ana@example.com"));
        let connection = api.connection_data().unwrap();
        assert_eq!(connection.user_account, "ana@example.com");
        assert_eq!(connection.authorization_header(), "token jwt");
    }
}
