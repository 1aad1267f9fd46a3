//! Subscription offer as received from the REST backend.
//!
//! Field names follow the backend's camelCase JSON. Period prices are read
//! leniently: a missing, `null`, non-numeric or negative price reads as zero.
//! The legacy `price` is kept only when it is a JSON number, unaltered, so
//! nothing but an exact `0` marks an offer free.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::BillingPeriod;
use crate::domain::foundation::OfferId;

/// Subject cap applied when an offer does not state one.
pub const DEFAULT_SUBJECT_COUNT: u32 = 4;

/// A purchasable subscription plan with per-period prices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// Catalog identifier. Absent for offers quoted inline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OfferId>,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient_price")]
    pub monthly_price: f64,

    #[serde(default, deserialize_with = "lenient_price")]
    pub trimester_price: f64,

    #[serde(default, deserialize_with = "lenient_price")]
    pub semester_price: f64,

    #[serde(default, deserialize_with = "lenient_price")]
    pub yearly_price: f64,

    /// Flat period price covering every subject.
    #[serde(default)]
    pub all_subjects: bool,

    /// Maximum subjects purchasable individually.
    #[serde(default, deserialize_with = "lenient_count")]
    pub subject_count: Option<u32>,

    /// Legacy single price. Exactly `Some(0)` marks the offer as free.
    #[serde(default, deserialize_with = "numeric_only", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl Offer {
    /// Creates an offer from its four period prices.
    pub fn with_period_prices(monthly: f64, trimester: f64, semester: f64, yearly: f64) -> Self {
        Self {
            monthly_price: sanitize_price(monthly),
            trimester_price: sanitize_price(trimester),
            semester_price: sanitize_price(semester),
            yearly_price: sanitize_price(yearly),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: OfferId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_all_subjects(mut self) -> Self {
        self.all_subjects = true;
        self
    }

    pub fn with_subject_count(mut self, count: u32) -> Self {
        self.subject_count = Some(count);
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Price of one billing cycle for `period`, zero when unavailable.
    pub fn price_for(&self, period: BillingPeriod) -> f64 {
        let raw = match period {
            BillingPeriod::Monthly => self.monthly_price,
            BillingPeriod::Trimester => self.trimester_price,
            BillingPeriod::Semester => self.semester_price,
            BillingPeriod::Yearly => self.yearly_price,
        };
        sanitize_price(raw)
    }

    /// Monthly price, zero when unavailable.
    pub fn monthly(&self) -> f64 {
        self.price_for(BillingPeriod::Monthly)
    }

    /// Maximum number of subjects a buyer may select individually.
    pub fn max_subjects(&self) -> u32 {
        self.subject_count.unwrap_or(DEFAULT_SUBJECT_COUNT)
    }
}

/// Maps non-finite and negative values to zero.
pub(crate) fn sanitize_price(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn price_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().map(sanitize_price),
        Value::String(s) => s.trim().parse::<f64>().ok().map(sanitize_price),
        _ => None,
    }
}

fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(price_from_value).unwrap_or(0.0))
}

fn numeric_only<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        _ => None,
    })
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(price_from_value)
        .filter(|count| *count >= 1.0)
        .map(|count| count.floor().min(f64::from(u32::MAX)) as u32))
}
