//! Subscriber list types

use serde::{Deserialize, Serialize};

/// Import state of a subscriber list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubscriberListState {
    Ready,
    SynchronizingContacts,
}

crate::impl_wire_name_conversions!(SubscriberListState {
    Ready => "ready",
    SynchronizingContacts => "synchronizingContacts",
});

impl SubscriberListState {
    /// Any status other than `ready` means contacts are still being imported.
    pub fn from_current_status(current_status: &str) -> Self {
        if current_status == Self::Ready.as_str() {
            Self::Ready
        } else {
            Self::SynchronizingContacts
        }
    }
}

/// Subscriber list as shown to the account owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriberList {
    pub name: String,
    pub id: u64,
    pub amount_subscribers: u64,
    pub state: SubscriberListState,
}
