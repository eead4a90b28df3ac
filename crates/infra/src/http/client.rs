use std::time::Duration;

use doppler_domain::{DopplerError, DEFAULT_TIMEOUT_SECONDS};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;

use crate::errors::InfraError;

/// Thin HTTP client: one attempt per request, bounded by a timeout.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, DopplerError> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the request once. Transport failures are returned untouched so
    /// callers can classify them.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, reqwest::Error> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, url = %redacted(&url), "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                let status = response.status();
                debug!(%method, url = %redacted(&url), %status, "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, url = %redacted(&url), error = %err, "HTTP request failed");
                Err(err)
            }
        }
    }
}

/// URL without query string, which may carry credentials.
fn redacted(url: &url::Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
    default_headers: Option<reqwest::header::HeaderMap>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            user_agent: None,
            default_headers: None,
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn default_headers(mut self, headers: reqwest::header::HeaderMap) -> Self {
        self.default_headers = Some(headers);
        self
    }

    pub fn build(self) -> Result<HttpClient, DopplerError> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        if let Some(headers) = self.default_headers {
            builder = builder.default_headers(headers);
        }

        let client = builder.build().map_err(|err| {
            let infra: InfraError = err.into();
            DopplerError::from(infra)
        })?;

        Ok(HttpClient { client })
    }
}
