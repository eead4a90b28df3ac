//! Lists and subscribers

use std::sync::Arc;

use async_trait::async_trait;
use doppler_core::DopplerApiClient;
use doppler_domain::{ClientResult, Subscriber, SubscriberList};
use tracing::instrument;

use super::client::ApiClient;
use super::payloads::{ListPayload, SubscriberPayload};

/// [`DopplerApiClient`] over the REST API.
pub struct HttpDopplerApiClient {
    api: Arc<ApiClient>,
}

impl HttpDopplerApiClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DopplerApiClient for HttpDopplerApiClient {
    #[instrument(skip(self))]
    async fn get_list_data(&self, list_id: u64) -> ClientResult<SubscriberList> {
        let list_id = list_id.to_string();
        self.api.get_account_resource::<ListPayload>(&["lists", list_id.as_str()]).await
    }

    #[instrument(skip_all)]
    async fn get_subscriber(&self, email: &str) -> ClientResult<Subscriber> {
        self.api.get_account_resource::<SubscriberPayload>(&["subscribers", email]).await
    }
}
