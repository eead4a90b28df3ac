//! Port interfaces for the plan catalogue

use async_trait::async_trait;
use doppler_domain::{ClientResult, DistinctPlan, Plan};

/// Raw plan catalogue served by the API.
#[async_trait]
pub trait AccountPlansApiClient: Send + Sync {
    /// `GET /plans`
    async fn get_all_plans(&self) -> ClientResult<Vec<Plan>>;
}

/// Plan offers as presented by the plan selection.
#[async_trait]
pub trait PlanService: Send + Sync {
    /// One entry per paid plan type with its cheapest price.
    async fn get_distinct_plans(&self) -> ClientResult<Vec<DistinctPlan>>;
}
