//! Domain types and models
//!
//! Data transfer objects returned by the API clients. Wire payloads are
//! decoded in the infrastructure layer and converted into these shapes.

pub mod billing;
pub mod list;
pub mod plan;
pub mod subscriber;

pub use billing::{BillingInformation, ConsumerType, PaymentMethod, PaymentType};
pub use list::{SubscriberList, SubscriberListState};
pub use plan::{DistinctPlan, Plan, PlanType};
pub use subscriber::{Subscriber, SubscriberField, SubscriberLink};
