//! Static data service
//!
//! Public JSON catalogues served without credentials, so requests skip the
//! session check entirely.

use std::time::Duration;

use async_trait::async_trait;
use doppler_core::StaticDataClient;
use doppler_domain::{ApiFailure, ApiResult, ConsumerType, DopplerError, StaticDataConfig};
use reqwest::Method;
use tracing::instrument;
use url::Url;

use super::client::{join_segments, json_http_client};
use super::payloads::ConsumerTypesPayload;
use super::response::read_envelope;
use crate::config::parse_base_url;
use crate::errors::transport_error;
use crate::http::HttpClient;

/// [`StaticDataClient`] over the static data CDN.
pub struct HttpStaticDataClient {
    http: HttpClient,
    base_url: Url,
}

impl HttpStaticDataClient {
    /// # Errors
    ///
    /// Returns `DopplerError::Config` if the base URL is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: &StaticDataConfig, timeout: Duration) -> Result<Self, DopplerError> {
        let base_url = parse_base_url(&config.base_url)?;
        let http = json_http_client(timeout, None)?;
        Ok(Self { http, base_url })
    }
}

#[async_trait]
impl StaticDataClient for HttpStaticDataClient {
    /// `GET {static}/consumer-types/{country}-{language}.json`
    #[instrument(skip(self))]
    async fn get_consumer_types_data(
        &self,
        country: &str,
        language: &str,
    ) -> ApiResult<Vec<ConsumerType>> {
        let file = format!("{country}-{language}.json");
        let url = join_segments(&self.base_url, &["consumer-types", file.as_str()]);
        let response = self
            .http
            .send(self.http.request(Method::GET, url))
            .await
            .map_err(|err| ApiFailure::Transport(transport_error(&err)))?;
        read_envelope::<ConsumerTypesPayload>(response).await
    }
}
