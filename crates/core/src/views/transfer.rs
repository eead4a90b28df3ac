//! Transfer payment method step of the checkout
//!
//! The billing country decides which form applies. It is resolved once, when
//! the data arrives, into a [`TransferForm`] variant; each variant owns its
//! own fields, labels, summary and validation.

use std::sync::Arc;

use doppler_domain::constants::{
    COUNTRY_ARGENTINA, COUNTRY_COLOMBIA, FINAL_CONSUMER, IDENTIFICATION_NUMBER_MAX_LENGTH,
};
use doppler_domain::{
    validate_cuit, validate_max_length, validate_required, ConsumerType, PaymentMethod,
    PaymentType, ValidationErrors,
};
use tracing::{debug, instrument, warn};

use super::state::{FetchTicket, ViewSlot, ViewState};
use crate::billing::ports::{BillingUserApiClient, StaticDataClient};

/// Form field names, as submitted with the checkout.
pub mod field_names {
    pub const IDENTIFICATION_NUMBER: &str = "identificationNumber";
    pub const BUSINESS_NAME: &str = "businessName";
    pub const CONSUMER_TYPE: &str = "consumerType";
    pub const RESPONSABLE_IVA: &str = "responsableIVA";
    pub const PAYMENT_METHOD_NAME: &str = "paymentMethodName";
}

/// Whether the step is being reviewed or edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferMode {
    ReadOnly,
    Edit,
}

/// Kind of tax identification asked for a consumer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentificationType {
    DniCuil,
    Cuit,
    Rfc,
}

impl IdentificationType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::DniCuil => "DNI/CUIL",
            Self::Cuit => "CUIT",
            Self::Rfc => "RFC",
        }
    }

    /// Identification asked for an Argentine (or Mexican `RFC`) consumer type.
    pub fn for_consumer_type(consumer_type: &str) -> Option<Self> {
        match consumer_type {
            "CF" => Some(Self::DniCuil),
            "RI" | "RNI" | "MT" | "EX" | "NG" | "NC" => Some(Self::Cuit),
            "RFC" => Some(Self::Rfc),
            _ => None,
        }
    }
}

/// Values submitted by the transfer step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferValues {
    pub identification_number: String,
    pub business_name: String,
    pub consumer_type: String,
    pub responsable_iva: bool,
    pub payment_method_name: PaymentType,
}

impl Default for TransferValues {
    fn default() -> Self {
        Self {
            identification_number: String::new(),
            business_name: String::new(),
            consumer_type: String::new(),
            responsable_iva: false,
            payment_method_name: PaymentType::Transfer,
        }
    }
}

impl TransferValues {
    /// Prefill from the registered payment method; blank when there is none.
    pub fn from_payment_method(payment_method: Option<&PaymentMethod>) -> Self {
        let Some(method) = payment_method else {
            return Self::default();
        };
        Self {
            identification_number: method.identification_number.clone().unwrap_or_default(),
            business_name: method.business_name.clone().unwrap_or_default(),
            consumer_type: method.consumer_type.clone().unwrap_or_default(),
            responsable_iva: method.responsable_iva.unwrap_or(false),
            payment_method_name: PaymentType::Transfer,
        }
    }

    /// Name/value pairs as submitted with the checkout form.
    pub fn fields(&self) -> [(&'static str, String); 5] {
        [
            (field_names::IDENTIFICATION_NUMBER, self.identification_number.clone()),
            (field_names::BUSINESS_NAME, self.business_name.clone()),
            (field_names::CONSUMER_TYPE, self.consumer_type.clone()),
            (field_names::RESPONSABLE_IVA, self.responsable_iva.to_string()),
            (field_names::PAYMENT_METHOD_NAME, self.payment_method_name.to_string()),
        ]
    }
}

/// Read-only line shown for an Argentine account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgentinaSummary {
    pub consumer_type: Option<ConsumerType>,
    pub identification_type: Option<IdentificationType>,
    pub identification_number: String,
    pub business_name: String,
}

impl ArgentinaSummary {
    /// `"{consumer type}, {id label}: {number}"`, plus the business name
    /// unless the buyer is a final consumer. The final consumer check goes by
    /// the payment method's own key, so it holds without the consumer types.
    pub fn text(&self) -> String {
        let consumer_type = self.consumer_type.as_ref();
        let consumer = consumer_type.map(|ct| ct.value.as_str()).unwrap_or_default();
        let label = self.identification_type.map(|it| it.label()).unwrap_or_default();
        let business = if self.identification_type == Some(IdentificationType::DniCuil) {
            String::new()
        } else {
            format!(", {}", self.business_name)
        };
        format!("{consumer}, {label}: {}{business}", self.identification_number)
    }
}

/// Editable Argentine transfer form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgentinaTransferForm {
    consumer_types: Vec<ConsumerType>,
    values: TransferValues,
}

impl ArgentinaTransferForm {
    pub fn new(consumer_types: Vec<ConsumerType>, values: TransferValues) -> Self {
        Self { consumer_types, values }
    }

    pub fn consumer_types(&self) -> &[ConsumerType] {
        &self.consumer_types
    }

    pub fn values(&self) -> &TransferValues {
        &self.values
    }

    /// Pick a consumer type; number and business name start over.
    pub fn change_consumer_type(&mut self, consumer_type: &str) {
        self.values = TransferValues {
            consumer_type: consumer_type.to_owned(),
            ..TransferValues::default()
        };
    }

    pub fn set_identification_number(&mut self, value: impl Into<String>) {
        self.values.identification_number = value.into();
    }

    pub fn set_business_name(&mut self, value: impl Into<String>) {
        self.values.business_name = value.into();
    }

    pub fn identification_type(&self) -> Option<IdentificationType> {
        IdentificationType::for_consumer_type(&self.values.consumer_type)
    }

    pub fn shows_identification_number(&self) -> bool {
        !self.values.consumer_type.is_empty()
    }

    pub fn shows_business_name(&self) -> bool {
        self.shows_identification_number() && !self.is_final_consumer()
    }

    fn is_final_consumer(&self) -> bool {
        self.values.consumer_type == FINAL_CONSUMER
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(field_names::CONSUMER_TYPE, validate_required(&self.values.consumer_type));

        if self.shows_identification_number() {
            let number = &self.values.identification_number;
            let outcome = validate_required(number)
                .and_then(|()| validate_max_length(number, IDENTIFICATION_NUMBER_MAX_LENGTH))
                .and_then(|()| {
                    if self.is_final_consumer() {
                        Ok(())
                    } else {
                        validate_cuit(number)
                    }
                });
            errors.check(field_names::IDENTIFICATION_NUMBER, outcome);
        }

        if self.shows_business_name() {
            errors.check(field_names::BUSINESS_NAME, validate_required(&self.values.business_name));
        }

        errors.into_result()
    }
}

/// Colombian transfer data; read-only or editable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColombiaTransfer {
    values: TransferValues,
    read_only: bool,
}

impl ColombiaTransfer {
    pub fn new(values: TransferValues, read_only: bool) -> Self {
        Self { values, read_only }
    }

    pub fn values(&self) -> &TransferValues {
        &self.values
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// `"NIT: {number}, {business name}"` plus `", Responsable IVA"`.
    pub fn summary(&self) -> String {
        let iva = if self.values.responsable_iva { ", Responsable IVA" } else { "" };
        format!("NIT: {}, {}{iva}", self.values.identification_number, self.values.business_name)
    }

    pub fn set_identification_number(&mut self, value: impl Into<String>) {
        self.values.identification_number = value.into();
    }

    pub fn set_business_name(&mut self, value: impl Into<String>) {
        self.values.business_name = value.into();
    }

    pub fn set_responsable_iva(&mut self, value: bool) {
        self.values.responsable_iva = value;
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(field_names::BUSINESS_NAME, validate_required(&self.values.business_name));

        let number = &self.values.identification_number;
        errors.check(
            field_names::IDENTIFICATION_NUMBER,
            validate_required(number)
                .and_then(|()| validate_max_length(number, IDENTIFICATION_NUMBER_MAX_LENGTH)),
        );

        errors.into_result()
    }
}

/// Transfer step, one variant per billing country and mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferForm {
    ArgentinaSummary(ArgentinaSummary),
    Argentina(ArgentinaTransferForm),
    Colombia(ColombiaTransfer),
    /// Countries without a transfer form render nothing.
    Unsupported { country: String },
}

impl TransferForm {
    /// Select the variant for `country` and prefill it.
    pub fn build(
        country: &str,
        mode: TransferMode,
        payment_method: Option<&PaymentMethod>,
        consumer_types: Vec<ConsumerType>,
    ) -> Self {
        let values = TransferValues::from_payment_method(payment_method);

        match (country, mode) {
            (COUNTRY_ARGENTINA, TransferMode::ReadOnly) => {
                let consumer_type =
                    consumer_types.into_iter().find(|ct| ct.key == values.consumer_type);
                Self::ArgentinaSummary(ArgentinaSummary {
                    consumer_type,
                    identification_type: IdentificationType::for_consumer_type(
                        &values.consumer_type,
                    ),
                    identification_number: values.identification_number,
                    business_name: values.business_name,
                })
            }
            (COUNTRY_ARGENTINA, TransferMode::Edit) => {
                Self::Argentina(ArgentinaTransferForm::new(consumer_types, values))
            }
            (COUNTRY_COLOMBIA, mode) => {
                Self::Colombia(ColombiaTransfer::new(values, mode == TransferMode::ReadOnly))
            }
            (other, _) => Self::Unsupported { country: other.to_owned() },
        }
    }
}

/// Transfer step view-model.
pub struct TransferView {
    billing: Arc<dyn BillingUserApiClient>,
    static_data: Arc<dyn StaticDataClient>,
    mode: TransferMode,
    language: String,
    slot: ViewSlot<TransferForm>,
}

impl TransferView {
    pub fn new(
        billing: Arc<dyn BillingUserApiClient>,
        static_data: Arc<dyn StaticDataClient>,
        mode: TransferMode,
        language: impl Into<String>,
    ) -> Self {
        Self { billing, static_data, mode, language: language.into(), slot: ViewSlot::new() }
    }

    pub fn state(&self) -> &ViewState<TransferForm> {
        self.slot.state()
    }

    pub fn form_mut(&mut self) -> Option<&mut TransferForm> {
        match self.slot.state_mut() {
            ViewState::Ready(form) => Some(form),
            _ => None,
        }
    }

    pub fn begin_load(&mut self) -> FetchTicket {
        self.slot.begin_fetch()
    }

    pub fn finish_load(&mut self, ticket: FetchTicket, state: ViewState<TransferForm>) -> bool {
        self.slot.complete(ticket, state)
    }

    /// Billing information, then consumer types for its country, then the
    /// current payment method.
    #[instrument(skip(billing, static_data))]
    pub async fn fetch(
        billing: Arc<dyn BillingUserApiClient>,
        static_data: Arc<dyn StaticDataClient>,
        mode: TransferMode,
        language: String,
    ) -> ViewState<TransferForm> {
        let billing_information = match billing.get_billing_information_data().await {
            Ok(Ok(information)) => information,
            Ok(Err(failure)) => {
                warn!(error = %failure, "billing information unavailable");
                return ViewState::Error(failure.to_string());
            }
            Err(unavailable) => {
                warn!(error = %unavailable, "billing information refused");
                return ViewState::Error(unavailable.to_string());
            }
        };
        let country = billing_information.country;

        let consumer_types = match static_data.get_consumer_types_data(&country, &language).await {
            Ok(types) => types,
            Err(failure) => {
                warn!(%country, error = %failure, "consumer types unavailable");
                Vec::new()
            }
        };

        let payment_method = match billing.get_payment_method_data().await {
            Ok(Ok(method)) => Some(method),
            Ok(Err(failure)) => {
                warn!(error = %failure, "payment method unavailable, starting blank");
                None
            }
            Err(unavailable) => {
                warn!(error = %unavailable, "payment method refused, starting blank");
                None
            }
        };

        debug!(%country, consumer_types = consumer_types.len(), "transfer data loaded");
        let form = TransferForm::build(&country, mode, payment_method.as_ref(), consumer_types);
        ViewState::Ready(form)
    }

    pub async fn load(&mut self) -> &ViewState<TransferForm> {
        let ticket = self.begin_load();
        let state = Self::fetch(
            self.billing.clone(),
            self.static_data.clone(),
            self.mode,
            self.language.clone(),
        )
        .await;
        self.finish_load(ticket, state);
        self.slot.state()
    }

    pub fn unmount(&mut self) {
        self.slot.unmount();
    }
}
