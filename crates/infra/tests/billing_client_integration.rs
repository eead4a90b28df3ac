//! Integration tests for the billing, plans and static data clients

#[path = "support.rs"]
mod support;

use std::sync::Arc;
use std::time::Duration;

use doppler_core::{
    AccountPlansApiClient, AccountPlansService, BillingUserApiClient, PlanService, SessionStore,
    StaticDataClient,
};
use doppler_domain::{ApiFailure, PaymentType, PlanType, SessionUnavailable, StaticDataConfig};
use doppler_infra::{HttpAccountPlansApiClient, HttpBillingUserApiClient, HttpStaticDataClient};
use serde_json::json;
use support::{api_client, authenticated_store, ACCOUNT, JWT};
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn billing_information_is_read_for_the_session_account() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/accounts/{ACCOUNT}/billing-information")))
        .and(header("authorization", format!("token {JWT}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "firstname": "Ana",
            "lastname": "García",
            "address": "Calle 1",
            "city": "Bogotá",
            "province": "Cundinamarca",
            "country": "CO",
            "zipCode": "110111",
            "phone": "+57 1 555 0000"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpBillingUserApiClient::new(api_client(&server, authenticated_store()));
    let info = client.get_billing_information_data().await.unwrap().unwrap();

    assert_eq!(info.firstname.as_deref(), Some("Ana"));
    assert_eq!(info.country, "co");
    assert_eq!(info.zip_code.as_deref(), Some("110111"));
}

#[tokio::test]
async fn payment_method_without_responsable_iva() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/accounts/{ACCOUNT}/payment-methods/current")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paymentMethodName": "TRANSF",
            "identificationNumber": "900123456",
            "razonSocial": "Acme SAS"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpBillingUserApiClient::new(api_client(&server, authenticated_store()));
    let payment = client.get_payment_method_data().await.unwrap().unwrap();

    assert_eq!(payment.payment_method_name, PaymentType::Transfer);
    assert_eq!(payment.identification_number.as_deref(), Some("900123456"));
    assert_eq!(payment.business_name.as_deref(), Some("Acme SAS"));
    assert_eq!(payment.consumer_type, None);
    assert_eq!(payment.responsable_iva, None);
}

#[tokio::test]
async fn billing_requires_a_session() {
    let server = MockServer::start().await;
    let client = HttpBillingUserApiClient::new(api_client(&server, Arc::new(SessionStore::new())));

    assert_eq!(
        client.get_billing_information_data().await.unwrap_err(),
        SessionUnavailable::Missing
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn plans_feed_the_plan_service() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/plans"))
        .and(header("authorization", format!("token {JWT}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "planType": "free", "price": 0 },
            { "planType": "subscribers", "price": 29 },
            { "planType": "subscribers", "price": 15 },
            { "planType": "monthly-deliveries", "price": 12.5 },
            { "planType": "prepaid", "price": 10 }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let plans = Arc::new(HttpAccountPlansApiClient::new(api_client(&server, authenticated_store())));
    let service = AccountPlansService::new(plans);

    let distinct = service.get_distinct_plans().await.unwrap().unwrap();
    let summary: Vec<_> = distinct.iter().map(|plan| (plan.plan_type, plan.min_price)).collect();

    assert_eq!(
        summary,
        vec![(PlanType::ByContact, 15.0), (PlanType::ByEmail, 12.5), (PlanType::ByCredit, 10.0)]
    );
}

#[tokio::test]
async fn plans_server_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/plans"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = HttpAccountPlansApiClient::new(api_client(&server, authenticated_store()));
    let failure = client.get_all_plans().await.unwrap().unwrap_err();

    assert_eq!(failure, ApiFailure::Server { status: 500, title: None });
}

#[tokio::test]
async fn consumer_types_are_fetched_without_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/static/consumer-types/ar-es.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "key": "CF", "value": "Consumidor Final" },
            { "key": "RI", "value": "Responsable Inscripto" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let config = StaticDataConfig { base_url: format!("{}/static/", server.uri()) };
    let client = HttpStaticDataClient::new(&config, Duration::from_secs(2)).unwrap();

    let types = client.get_consumer_types_data("ar", "es").await.unwrap();
    assert_eq!(types.len(), 2);
    assert_eq!(types[1].key, "RI");
    assert_eq!(types[1].value, "Responsable Inscripto");

    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|request| !request.headers.contains_key("authorization")));
}

#[tokio::test]
async fn missing_consumer_types_file_is_a_server_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header_exists("accept"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let config = StaticDataConfig { base_url: server.uri() };
    let client = HttpStaticDataClient::new(&config, Duration::from_secs(2)).unwrap();

    let failure = client.get_consumer_types_data("xx", "es").await.unwrap_err();
    assert_eq!(failure.status(), Some(404));
}
