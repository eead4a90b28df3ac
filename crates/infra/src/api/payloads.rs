//! Wire payloads and their decoders
//!
//! Each payload mirrors the JSON the backend sends, with serde doing the
//! shape check. Conversion into the domain type is total: a body that
//! deserializes always maps field by field, and anything that does not is
//! reported as a payload failure by the caller.

use doppler_domain::{
    BillingInformation, ConsumerType, PaymentMethod, PaymentType, Plan, PlanType, Subscriber,
    SubscriberField, SubscriberLink, SubscriberList, SubscriberListState,
};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};

/// A JSON body that maps into a domain value.
pub trait WirePayload: DeserializeOwned {
    type Domain;

    fn into_domain(self) -> Result<Self::Domain, String>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPayload {
    pub name: String,
    pub list_id: u64,
    pub subscribers_count: u64,
    pub current_status: String,
}

impl WirePayload for ListPayload {
    type Domain = SubscriberList;

    fn into_domain(self) -> Result<SubscriberList, String> {
        Ok(SubscriberList {
            name: self.name,
            id: self.list_id,
            amount_subscribers: self.subscribers_count,
            state: SubscriberListState::from_current_status(&self.current_status),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct FieldPayload {
    pub name: String,
    pub value: String,
    pub predefined: bool,
    pub private: bool,
    pub readonly: bool,
    #[serde(rename = "type")]
    pub field_type: String,
}

#[derive(Debug, Deserialize)]
pub struct LinkPayload {
    pub href: String,
    pub description: String,
    pub rel: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberPayload {
    pub email: String,
    pub fields: Vec<FieldPayload>,
    pub belongs_to_lists: Vec<String>,
    pub unsubscribed_date: Option<String>,
    pub unsubscription_type: Option<String>,
    pub manual_unsubscription_reason: Option<String>,
    pub unsubscription_comment: Option<String>,
    pub status: String,
    #[serde(default)]
    pub can_be_reactivated: bool,
    #[serde(default)]
    pub is_being_reactivated: bool,
    pub score: f64,
    #[serde(rename = "_links")]
    pub links: Vec<LinkPayload>,
}

impl WirePayload for SubscriberPayload {
    type Domain = Subscriber;

    fn into_domain(self) -> Result<Subscriber, String> {
        Ok(Subscriber {
            email: self.email,
            fields: self
                .fields
                .into_iter()
                .map(|field| SubscriberField {
                    name: field.name,
                    value: field.value,
                    predefined: field.predefined,
                    private: field.private,
                    readonly: field.readonly,
                    field_type: field.field_type,
                })
                .collect(),
            belongs_to_lists: self.belongs_to_lists,
            unsubscribed_date: self.unsubscribed_date,
            unsubscription_type: self.unsubscription_type,
            manual_unsubscription_reason: self.manual_unsubscription_reason,
            unsubscription_comment: self.unsubscription_comment,
            status: self.status,
            can_be_reactivated: self.can_be_reactivated,
            is_being_reactivated: self.is_being_reactivated,
            score: self.score,
            links: self
                .links
                .into_iter()
                .map(|link| SubscriberLink {
                    href: link.href,
                    description: link.description,
                    rel: link.rel,
                })
                .collect(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingInformationPayload {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: String,
    pub zip_code: Option<String>,
    pub phone: Option<String>,
}

impl WirePayload for BillingInformationPayload {
    type Domain = BillingInformation;

    fn into_domain(self) -> Result<BillingInformation, String> {
        let country = self.country.trim().to_ascii_lowercase();
        if country.is_empty() {
            return Err("billing information has an empty country".to_string());
        }
        Ok(BillingInformation {
            firstname: self.firstname,
            lastname: self.lastname,
            address: self.address,
            city: self.city,
            province: self.province,
            country,
            zip_code: self.zip_code,
            phone: self.phone,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodPayload {
    pub payment_method_name: PaymentType,
    pub identification_number: Option<String>,
    #[serde(rename = "razonSocial")]
    pub business_name: Option<String>,
    #[serde(rename = "idConsumerType")]
    pub consumer_type: Option<String>,
    #[serde(rename = "responsableIVA", default, deserialize_with = "flexible_bool")]
    pub responsable_iva: Option<bool>,
}

impl WirePayload for PaymentMethodPayload {
    type Domain = PaymentMethod;

    fn into_domain(self) -> Result<PaymentMethod, String> {
        Ok(PaymentMethod {
            payment_method_name: self.payment_method_name,
            identification_number: self.identification_number,
            business_name: self.business_name,
            consumer_type: self.consumer_type,
            responsable_iva: self.responsable_iva,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FlexibleBool {
    Bool(bool),
    Number(u64),
    Text(String),
}

/// `true`/`false`, `1`/`0` or `"1"`/`"0"`; `null` reads as absent.
fn flexible_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<FlexibleBool>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(value) => value,
    };
    match value {
        FlexibleBool::Bool(flag) => Ok(Some(flag)),
        FlexibleBool::Number(0) => Ok(Some(false)),
        FlexibleBool::Number(1) => Ok(Some(true)),
        FlexibleBool::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "0" | "false" => Ok(Some(false)),
            "1" | "true" => Ok(Some(true)),
            other => Err(D::Error::custom(format!("invalid boolean flag: {other:?}"))),
        },
        FlexibleBool::Number(other) => {
            Err(D::Error::custom(format!("invalid boolean flag: {other}")))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ConsumerTypePayload {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct ConsumerTypesPayload(pub Vec<ConsumerTypePayload>);

impl WirePayload for ConsumerTypesPayload {
    type Domain = Vec<ConsumerType>;

    fn into_domain(self) -> Result<Vec<ConsumerType>, String> {
        Ok(self
            .0
            .into_iter()
            .map(|item| ConsumerType { key: item.key, value: item.value })
            .collect())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPayload {
    pub plan_type: PlanType,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct PlansPayload(pub Vec<PlanPayload>);

impl WirePayload for PlansPayload {
    type Domain = Vec<Plan>;

    fn into_domain(self) -> Result<Vec<Plan>, String> {
        self.0
            .into_iter()
            .map(|plan| {
                if plan.price.is_finite() && plan.price >= 0.0 {
                    Ok(Plan { plan_type: plan.plan_type, price: plan.price })
                } else {
                    Err(format!("plan {} has an invalid price {}", plan.plan_type, plan.price))
                }
            })
            .collect()
    }
}
