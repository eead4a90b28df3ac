//! Plan catalogue types

use serde::{Deserialize, Serialize};

/// Kind of plan an account can buy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlanType {
    #[serde(rename = "free")]
    Free,
    #[serde(rename = "subscribers")]
    ByContact,
    #[serde(rename = "monthly-deliveries")]
    ByEmail,
    #[serde(rename = "prepaid")]
    ByCredit,
}

crate::impl_wire_name_conversions!(PlanType {
    Free => "free",
    ByContact => "subscribers",
    ByEmail => "monthly-deliveries",
    ByCredit => "prepaid",
});

impl PlanType {
    /// Paid plan types in the order the plan selection shows them.
    pub const PAID: [PlanType; 3] = [PlanType::ByContact, PlanType::ByEmail, PlanType::ByCredit];

    /// Segment used in buy-process URLs (`/buy-process/primer-pantalla/{segment}`).
    pub fn url_segment(&self) -> Option<&'static str> {
        match self {
            Self::Free => None,
            Self::ByContact => Some("contactos"),
            Self::ByEmail => Some("envios"),
            Self::ByCredit => Some("creditos"),
        }
    }

    /// Reverse of [`PlanType::url_segment`].
    pub fn from_url_segment(segment: &str) -> Option<Self> {
        Self::PAID.into_iter().find(|plan_type| plan_type.url_segment() == Some(segment))
    }

    pub fn is_paid(&self) -> bool {
        !matches!(self, Self::Free)
    }
}

/// One purchasable plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub plan_type: PlanType,
    pub price: f64,
}

/// Cheapest offer of one plan type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistinctPlan {
    pub plan_type: PlanType,
    pub min_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_segments_round_trip_for_paid_types() {
        for plan_type in PlanType::PAID {
            let segment = plan_type.url_segment().unwrap();
            assert_eq!(PlanType::from_url_segment(segment), Some(plan_type));
        }
        assert_eq!(PlanType::Free.url_segment(), None);
        assert_eq!(PlanType::from_url_segment("gratis"), None);
    }

    #[test]
    fn wire_names_match_catalogue() {
        assert_eq!(PlanType::ByEmail.to_string(), "monthly-deliveries");
        assert_eq!("prepaid".parse::<PlanType>().unwrap(), PlanType::ByCredit);
        assert!(!PlanType::Free.is_paid());
    }
}
