//! Plan selection view driven through the plan service.

mod support;

use std::sync::Arc;

use doppler_core::{AccountPlansService, PlanSelectionView, ViewState};
use doppler_domain::constants::PLAN_SELECTION_TITLE_KEY;
use doppler_domain::{ApiFailure, Plan, PlanType};
use support::clients::{sample_plans, MockPlansClient};

fn view_for(client: Arc<MockPlansClient>, url_segment: &str) -> PlanSelectionView {
    PlanSelectionView::new(Arc::new(AccountPlansService::new(client)), url_segment)
}

#[tokio::test]
async fn shows_one_card_per_paid_plan_type() {
    let client = MockPlansClient::returning(sample_plans());
    let mut view = view_for(client.clone(), "envios");

    assert!(view.state().is_loading());
    assert!(view.title().is_none());

    view.load().await;

    let cards = view.state().ready().expect("plans should be ready");
    let summary: Vec<_> =
        cards.iter().map(|card| (card.plan_type, card.min_price, card.selected)).collect();
    assert_eq!(
        summary,
        vec![
            (PlanType::ByContact, 15.0, false),
            (PlanType::ByEmail, 12.5, true),
            (PlanType::ByCredit, 10.0, false),
        ]
    );
    assert_eq!(view.title(), Some(PLAN_SELECTION_TITLE_KEY));
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn select_moves_the_highlight() {
    let mut view = view_for(MockPlansClient::returning(sample_plans()), "contactos");
    view.load().await;

    view.select(PlanType::ByCredit);

    let selected: Vec<_> = view
        .state()
        .ready()
        .unwrap()
        .iter()
        .filter(|card| card.selected)
        .map(|card| card.plan_type)
        .collect();
    assert_eq!(selected, vec![PlanType::ByCredit]);
    assert_eq!(view.selected_plan_type(), Some(PlanType::ByCredit));
}

#[tokio::test]
async fn only_free_plans_render_empty() {
    let client = MockPlansClient::returning(vec![Plan {
        plan_type: PlanType::Free,
        price: 0.0,
    }]);
    let mut view = view_for(client, "contactos");

    assert_eq!(view.load().await, &ViewState::Empty);
    assert!(view.title().is_none());
}

#[tokio::test]
async fn server_failure_renders_error() {
    let failure = ApiFailure::Server { status: 500, title: Some("Boom".into()) };
    let mut view = view_for(MockPlansClient::failing(failure), "contactos");

    assert_eq!(view.load().await.error(), Some("Boom"));
}

#[tokio::test]
async fn missing_session_renders_error() {
    let mut view = view_for(MockPlansClient::without_session(), "contactos");

    let message = view.load().await.error().unwrap().to_owned();
    assert!(message.contains("not available"), "unexpected message: {message}");
}

#[tokio::test]
async fn unknown_segment_selects_nothing() {
    let mut view = view_for(MockPlansClient::returning(sample_plans()), "gratis");
    view.load().await;

    assert_eq!(view.selected_plan_type(), None);
    assert!(view.state().ready().unwrap().iter().all(|card| !card.selected));
}

#[tokio::test]
async fn result_after_unmount_is_discarded() {
    let mut view = view_for(MockPlansClient::returning(sample_plans()), "contactos");

    let ticket = view.begin_load();
    let state = PlanSelectionView::fetch(view.plan_service(), view.selected_plan_type()).await;
    view.unmount();

    assert!(!view.finish_load(ticket, state));
    assert!(view.state().is_loading());
}

#[tokio::test]
async fn stale_result_does_not_overwrite_newer_one() {
    let mut view = view_for(MockPlansClient::returning(sample_plans()), "contactos");

    let first = view.begin_load();
    let second = view.begin_load();
    let failure = ViewState::Error("late".into());
    let fresh = PlanSelectionView::fetch(view.plan_service(), view.selected_plan_type()).await;

    assert!(view.finish_load(second, fresh));
    assert!(!view.finish_load(first, failure));
    assert!(view.state().ready().is_some());
}
