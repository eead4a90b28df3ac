//! Port interfaces for billing data

use async_trait::async_trait;
use doppler_domain::{ApiResult, BillingInformation, ClientResult, ConsumerType, PaymentMethod};

/// Billing data of the session's account.
#[async_trait]
pub trait BillingUserApiClient: Send + Sync {
    /// `GET /accounts/{account}/billing-information`
    async fn get_billing_information_data(&self) -> ClientResult<BillingInformation>;

    /// `GET /accounts/{account}/payment-methods/current`
    async fn get_payment_method_data(&self) -> ClientResult<PaymentMethod>;
}

/// Public catalogues that do not depend on the session.
#[async_trait]
pub trait StaticDataClient: Send + Sync {
    /// Consumer types available in `country`, labelled in `language`.
    async fn get_consumer_types_data(
        &self,
        country: &str,
        language: &str,
    ) -> ApiResult<Vec<ConsumerType>>;
}
