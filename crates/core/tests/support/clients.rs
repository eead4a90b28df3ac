//! In-memory client mocks

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use doppler_core::{AccountPlansApiClient, BillingUserApiClient, StaticDataClient};
use doppler_domain::{
    ApiFailure, ApiResult, BillingInformation, ClientResult, ConsumerType, PaymentMethod,
    PaymentType, Plan, PlanType, SessionUnavailable,
};

/// Catalogue of plans served by [`MockPlansClient`].
pub fn sample_plans() -> Vec<Plan> {
    vec![
        Plan { plan_type: PlanType::Free, price: 0.0 },
        Plan { plan_type: PlanType::ByContact, price: 15.0 },
        Plan { plan_type: PlanType::ByContact, price: 29.0 },
        Plan { plan_type: PlanType::ByEmail, price: 12.5 },
        Plan { plan_type: PlanType::ByCredit, price: 38.0 },
        Plan { plan_type: PlanType::ByCredit, price: 10.0 },
    ]
}

/// Fixed plans outcome, counting calls.
pub struct MockPlansClient {
    outcome: ClientResult<Vec<Plan>>,
    calls: AtomicUsize,
}

impl MockPlansClient {
    pub fn returning(plans: Vec<Plan>) -> Arc<Self> {
        Arc::new(Self { outcome: Ok(Ok(plans)), calls: AtomicUsize::new(0) })
    }

    pub fn failing(failure: ApiFailure) -> Arc<Self> {
        Arc::new(Self { outcome: Ok(Err(failure)), calls: AtomicUsize::new(0) })
    }

    pub fn without_session() -> Arc<Self> {
        Arc::new(Self { outcome: Err(SessionUnavailable::Missing), calls: AtomicUsize::new(0) })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountPlansApiClient for MockPlansClient {
    async fn get_all_plans(&self) -> ClientResult<Vec<Plan>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// Billing data for one account.
pub struct MockBillingClient {
    pub billing_information: ClientResult<BillingInformation>,
    pub payment_method: ClientResult<PaymentMethod>,
}

impl MockBillingClient {
    pub fn for_country(country: &str, payment_method: PaymentMethod) -> Arc<Self> {
        Arc::new(Self {
            billing_information: Ok(Ok(BillingInformation {
                country: country.to_owned(),
                ..BillingInformation::default()
            })),
            payment_method: Ok(Ok(payment_method)),
        })
    }
}

#[async_trait]
impl BillingUserApiClient for MockBillingClient {
    async fn get_billing_information_data(&self) -> ClientResult<BillingInformation> {
        self.billing_information.clone()
    }

    async fn get_payment_method_data(&self) -> ClientResult<PaymentMethod> {
        self.payment_method.clone()
    }
}

/// Consumer types keyed by nothing; every country gets the same list.
pub struct MockStaticDataClient {
    pub consumer_types: ApiResult<Vec<ConsumerType>>,
}

impl MockStaticDataClient {
    pub fn argentina() -> Arc<Self> {
        Arc::new(Self {
            consumer_types: Ok(vec![
                ConsumerType { key: "CF".into(), value: "Consumidor Final".into() },
                ConsumerType { key: "RI".into(), value: "Responsable Inscripto".into() },
                ConsumerType { key: "RFC".into(), value: "Registro Federal".into() },
            ]),
        })
    }

    pub fn failing(failure: ApiFailure) -> Arc<Self> {
        Arc::new(Self { consumer_types: Err(failure) })
    }
}

#[async_trait]
impl StaticDataClient for MockStaticDataClient {
    async fn get_consumer_types_data(
        &self,
        _country: &str,
        _language: &str,
    ) -> ApiResult<Vec<ConsumerType>> {
        self.consumer_types.clone()
    }
}

pub fn transfer_payment_method(responsable_iva: Option<bool>) -> PaymentMethod {
    PaymentMethod {
        payment_method_name: PaymentType::Transfer,
        identification_number: Some("20123456786".into()),
        business_name: Some("Acme SRL".into()),
        consumer_type: Some("RI".into()),
        responsable_iva,
    }
}
