//! Billing information and payment method of the session's account

use std::sync::Arc;

use async_trait::async_trait;
use doppler_core::BillingUserApiClient;
use doppler_domain::{BillingInformation, ClientResult, PaymentMethod};
use tracing::instrument;

use super::client::ApiClient;
use super::payloads::{BillingInformationPayload, PaymentMethodPayload};

/// [`BillingUserApiClient`] over the REST API.
pub struct HttpBillingUserApiClient {
    api: Arc<ApiClient>,
}

impl HttpBillingUserApiClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl BillingUserApiClient for HttpBillingUserApiClient {
    #[instrument(skip(self))]
    async fn get_billing_information_data(&self) -> ClientResult<BillingInformation> {
        self.api.get_account_resource::<BillingInformationPayload>(&["billing-information"]).await
    }

    #[instrument(skip(self))]
    async fn get_payment_method_data(&self) -> ClientResult<PaymentMethod> {
        self.api
            .get_account_resource::<PaymentMethodPayload>(&["payment-methods", "current"])
            .await
    }
}
