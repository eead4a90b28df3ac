//! Plan selection: first screen of the buy process
//!
//! Lists one card per paid plan type with its starting price. The plan type
//! in the URL (`/buy-process/primer-pantalla/{segment}`) marks the card that
//! starts selected.

use std::sync::Arc;

use doppler_domain::constants::PLAN_SELECTION_TITLE_KEY;
use doppler_domain::{DistinctPlan, PlanType};
use tracing::{debug, instrument};

use super::state::{FetchTicket, ViewSlot, ViewState};
use crate::plans::ports::PlanService;

/// One selectable plan type.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanCard {
    pub plan_type: PlanType,
    pub min_price: f64,
    pub selected: bool,
}

/// Plan selection view-model.
pub struct PlanSelectionView {
    plan_service: Arc<dyn PlanService>,
    selected: Option<PlanType>,
    slot: ViewSlot<Vec<PlanCard>>,
}

impl PlanSelectionView {
    /// Mount the view for the plan type named by `url_segment`.
    pub fn new(plan_service: Arc<dyn PlanService>, url_segment: &str) -> Self {
        let selected = PlanType::from_url_segment(url_segment);
        if selected.is_none() {
            debug!(url_segment, "unknown plan type in url");
        }
        Self { plan_service, selected, slot: ViewSlot::new() }
    }

    pub fn selected_plan_type(&self) -> Option<PlanType> {
        self.selected
    }

    pub fn state(&self) -> &ViewState<Vec<PlanCard>> {
        self.slot.state()
    }

    /// Title message key, available once the plans are shown.
    pub fn title(&self) -> Option<&'static str> {
        self.slot.state().ready().map(|_| PLAN_SELECTION_TITLE_KEY)
    }

    /// Start loading; pair with [`PlanSelectionView::finish_load`].
    pub fn begin_load(&mut self) -> FetchTicket {
        self.slot.begin_fetch()
    }

    /// Fetch the plans without touching the view state.
    #[instrument(skip(plan_service))]
    pub async fn fetch(
        plan_service: Arc<dyn PlanService>,
        selected: Option<PlanType>,
    ) -> ViewState<Vec<PlanCard>> {
        let result = plan_service.get_distinct_plans().await;
        ViewState::from_client_result(result, Vec::is_empty).map(|plans| cards(plans, selected))
    }

    /// Apply a fetched state; `false` if the view moved on in the meantime.
    pub fn finish_load(&mut self, ticket: FetchTicket, state: ViewState<Vec<PlanCard>>) -> bool {
        self.slot.complete(ticket, state)
    }

    /// Load and apply in one step.
    pub async fn load(&mut self) -> &ViewState<Vec<PlanCard>> {
        let ticket = self.begin_load();
        let state = Self::fetch(self.plan_service.clone(), self.selected).await;
        self.finish_load(ticket, state);
        self.slot.state()
    }

    /// Select another card without refetching.
    pub fn select(&mut self, plan_type: PlanType) {
        self.selected = Some(plan_type);
        if let ViewState::Ready(cards) = self.slot.state_mut() {
            for card in cards.iter_mut() {
                card.selected = card.plan_type == plan_type;
            }
        }
    }

    pub fn plan_service(&self) -> Arc<dyn PlanService> {
        self.plan_service.clone()
    }

    pub fn unmount(&mut self) {
        self.slot.unmount();
    }
}

fn cards(plans: Vec<DistinctPlan>, selected: Option<PlanType>) -> Vec<PlanCard> {
    plans
        .into_iter()
        .map(|plan| PlanCard {
            plan_type: plan.plan_type,
            min_price: plan.min_price,
            selected: Some(plan.plan_type) == selected,
        })
        .collect()
}
