use std::sync::Arc;

use async_trait::async_trait;
use doppler_core::AccountPlansApiClient;
use doppler_domain::{ClientResult, Plan};
use tracing::instrument;

use super::client::ApiClient;
use super::payloads::PlansPayload;

/// [`AccountPlansApiClient`] over `GET /plans`.
pub struct HttpAccountPlansApiClient {
    api: Arc<ApiClient>,
}

impl HttpAccountPlansApiClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AccountPlansApiClient for HttpAccountPlansApiClient {
    #[instrument(skip(self))]
    async fn get_all_plans(&self) -> ClientResult<Vec<Plan>> {
        self.api.get_resource::<PlansPayload>(&["plans"]).await
    }
}
