//! Plan service - derives the plan selection offers from the catalogue

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use doppler_domain::{ClientResult, DistinctPlan, Plan, PlanType};
use tracing::debug;

use super::ports::{AccountPlansApiClient, PlanService};

/// [`PlanService`] backed by the account plans API.
pub struct AccountPlansService {
    plans: Arc<dyn AccountPlansApiClient>,
}

impl AccountPlansService {
    pub fn new(plans: Arc<dyn AccountPlansApiClient>) -> Self {
        Self { plans }
    }
}

#[async_trait]
impl PlanService for AccountPlansService {
    async fn get_distinct_plans(&self) -> ClientResult<Vec<DistinctPlan>> {
        let outcome = self.plans.get_all_plans().await?;
        Ok(outcome.map(|plans| {
            let distinct = distinct_plans(&plans);
            debug!(plans = plans.len(), distinct = distinct.len(), "derived distinct plans");
            distinct
        }))
    }
}

/// Cheapest plan per paid type, ordered contacts, emails, credits.
pub fn distinct_plans(plans: &[Plan]) -> Vec<DistinctPlan> {
    let mut cheapest: BTreeMap<PlanType, f64> = BTreeMap::new();

    for plan in plans.iter().filter(|plan| plan.plan_type.is_paid()) {
        cheapest
            .entry(plan.plan_type)
            .and_modify(|price| *price = price.min(plan.price))
            .or_insert(plan.price);
    }

    cheapest
        .into_iter()
        .map(|(plan_type, min_price)| DistinctPlan { plan_type, min_price })
        .collect()
}
