//! Billing types: billing address, current payment method, consumer types

use serde::{Deserialize, Serialize};

/// Payment method kinds accepted at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentType {
    #[serde(rename = "CC")]
    CreditCard,
    #[serde(rename = "TRANSF")]
    Transfer,
    #[serde(rename = "MP")]
    MercadoPago,
}

crate::impl_wire_name_conversions!(PaymentType {
    CreditCard => "CC",
    Transfer => "TRANSF",
    MercadoPago => "MP",
});

/// Billing address of the account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingInformation {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    /// Lower-case ISO 3166-1 alpha-2 code (`ar`, `co`, `mx`, ...)
    pub country: String,
    pub zip_code: Option<String>,
    pub phone: Option<String>,
}

/// Payment method currently registered for the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub payment_method_name: PaymentType,
    pub identification_number: Option<String>,
    pub business_name: Option<String>,
    pub consumer_type: Option<String>,
    /// Colombian VAT-liable flag; `None` when the account never answered.
    pub responsable_iva: Option<bool>,
}

/// Tax category of the buyer, e.g. `RI` (registered VAT payer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerType {
    pub key: String,
    pub value: String,
}
