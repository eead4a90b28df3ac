//! Port interfaces for account resources
//!
//! Implemented by `doppler_infra::api::HttpDopplerApiClient`.

use async_trait::async_trait;
use doppler_domain::{ClientResult, Subscriber, SubscriberList};

/// Read access to the lists and subscribers of the session's account.
#[async_trait]
pub trait DopplerApiClient: Send + Sync {
    /// `GET /accounts/{account}/lists/{list_id}`
    async fn get_list_data(&self, list_id: u64) -> ClientResult<SubscriberList>;

    /// `GET /accounts/{account}/subscribers/{email}`
    async fn get_subscriber(&self, email: &str) -> ClientResult<Subscriber>;
}
