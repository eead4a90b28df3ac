//! Subscriber types

use serde::{Deserialize, Serialize};

/// Custom or predefined field stored on a subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriberField {
    pub name: String,
    pub value: String,
    pub predefined: bool,
    pub private: bool,
    pub readonly: bool,
    pub field_type: String,
}

/// Hypermedia link attached to a subscriber resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriberLink {
    pub href: String,
    pub description: String,
    pub rel: String,
}

/// Subscriber of the account, with its lists and unsubscription details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscriber {
    pub email: String,
    pub fields: Vec<SubscriberField>,
    pub belongs_to_lists: Vec<String>,
    pub unsubscribed_date: Option<String>,
    pub unsubscription_type: Option<String>,
    pub manual_unsubscription_reason: Option<String>,
    pub unsubscription_comment: Option<String>,
    pub status: String,
    pub can_be_reactivated: bool,
    pub is_being_reactivated: bool,
    pub score: f64,
    pub links: Vec<SubscriberLink>,
}
