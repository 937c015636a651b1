use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;
use validator::Validate;

use super::organization::OrganizationPlan;

/// Subscription lifecycle status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, sqlx::Type)]
pub enum SubscriptionStatus {
    Active,
    Canceled,
    #[serde(rename = "Past Due")]
    #[sqlx(rename = "Past Due")]
    PastDue,
}

impl Display for SubscriptionStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            SubscriptionStatus::Active => write!(f, "Active"),
            SubscriptionStatus::Canceled => write!(f, "Canceled"),
            SubscriptionStatus::PastDue => write!(f, "Past Due"),
        }
    }
}

/// Subscription entity. `amount` and the billing dates are pre-formatted
/// display strings; no currency or date math happens in this layer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub organization: String,
    pub plan: OrganizationPlan,
    pub status: SubscriptionStatus,
    pub amount: String,
    pub billing_cycle: String,
    pub next_billing: String,
    pub payment_method: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionRequest {
    #[validate(length(min = 2, message = "Organization must be at least 2 characters"))]
    pub organization: String,
    pub plan: OrganizationPlan,
    pub status: SubscriptionStatus,
    pub amount: String,
    pub billing_cycle: String,
    pub next_billing: String,
    pub payment_method: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubscriptionRequest {
    #[validate(length(min = 2, message = "Organization must be at least 2 characters"))]
    pub organization: Option<String>,
    pub plan: Option<OrganizationPlan>,
    pub status: Option<SubscriptionStatus>,
    pub amount: Option<String>,
    pub billing_cycle: Option<String>,
    pub next_billing: Option<String>,
    pub payment_method: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn past_due_serializes_with_a_space() {
        let json = serde_json::to_string(&SubscriptionStatus::PastDue).unwrap();
        assert_eq!(json, "\"Past Due\"");
        let back: SubscriptionStatus = serde_json::from_str("\"Past Due\"").unwrap();
        assert_eq!(back, SubscriptionStatus::PastDue);
    }
}
