use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Label;

/// Current subscription (`GET /api/v3/subscriptions`). The endpoint answers
/// 404 when the account has none.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    #[serde(rename = "planId")]
    pub plan_id: String,
    pub plan: Label,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    pub cost: f64,
    pub currency: String,
    pub interval: BillingInterval,
    #[serde(rename = "startedAt")]
    pub started_at: DateTime<Utc>,
    #[serde(rename = "periodEndingAt")]
    pub period_ending_at: DateTime<Utc>,
    #[serde(rename = "isInTrialPeriod")]
    pub is_in_trial_period: bool,
    #[serde(rename = "trialEndingAt", default)]
    pub trial_ending_at: Option<DateTime<Utc>>,
    pub canceled: bool,
    #[serde(rename = "payProvider", default)]
    pub pay_provider: Option<Label>,
}

impl Subscription {
    /// Cost spread over one month.
    pub fn monthly_cost(&self) -> f64 {
        match self.interval {
            BillingInterval::Yearly => self.cost / 12.0,
            _ => self.cost,
        }
    }
}

/// Billing period, sent as a number by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum BillingInterval {
    Monthly,
    Yearly,
    Other(u8),
}

impl From<u8> for BillingInterval {
    fn from(value: u8) -> Self {
        match value {
            1 => BillingInterval::Monthly,
            2 => BillingInterval::Yearly,
            other => BillingInterval::Other(other),
        }
    }
}

impl From<BillingInterval> for u8 {
    fn from(value: BillingInterval) -> Self {
        match value {
            BillingInterval::Monthly => 1,
            BillingInterval::Yearly => 2,
            BillingInterval::Other(other) => other,
        }
    }
}

/// Entry of the public plan catalog (`GET /api/v3/subscriptions/plans`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub product: u32,
    pub interval: BillingInterval,
    pub currency: String,
    pub price: f64,
    #[serde(rename = "pricePerMonth")]
    pub price_per_month: f64,
}

impl Plan {
    pub fn product_name(&self) -> String {
        match self.product {
            2 => "Pro".to_string(),
            3 => "Unlimited".to_string(),
            4 => "Premium".to_string(),
            5 => "Team".to_string(),
            other => format!("Product {other}"),
        }
    }

    /// Yearly saving over paying `monthly` twelve times, for a yearly plan.
    pub fn yearly_saving_over(&self, monthly: &Plan) -> Option<f64> {
        let comparable = self.interval == BillingInterval::Yearly
            && monthly.interval == BillingInterval::Monthly
            && self.product == monthly.product
            && self.currency == monthly.currency;
        comparable.then(|| monthly.price * 12.0 - self.price)
    }
}
