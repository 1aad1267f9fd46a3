//! Billing period definitions.
//!
//! Represents the billing cycles an offer can be purchased for.

use serde::{Deserialize, Serialize};

/// Billing cycle of a subscription purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingPeriod {
    /// One month.
    Monthly,

    /// Three months.
    Trimester,

    /// Six months.
    Semester,

    /// Twelve months. Carries the richest subject bundling discount.
    Yearly,
}

impl BillingPeriod {
    /// All periods in display order.
    pub const ALL: [BillingPeriod; 4] = [
        BillingPeriod::Monthly,
        BillingPeriod::Trimester,
        BillingPeriod::Semester,
        BillingPeriod::Yearly,
    ];

    /// Number of months covered by one billing cycle.
    pub fn months(&self) -> u32 {
        match self {
            BillingPeriod::Monthly => 1,
            BillingPeriod::Trimester => 3,
            BillingPeriod::Semester => 6,
            BillingPeriod::Yearly => 12,
        }
    }

    /// Returns the display label for this period.
    pub fn label(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "Monthly",
            BillingPeriod::Trimester => "Trimester",
            BillingPeriod::Semester => "Semester",
            BillingPeriod::Yearly => "Yearly",
        }
    }

    /// Returns the wire code (`MONTHLY`, `TRIMESTER`, ...).
    pub fn code(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "MONTHLY",
            BillingPeriod::Trimester => "TRIMESTER",
            BillingPeriod::Semester => "SEMESTER",
            BillingPeriod::Yearly => "YEARLY",
        }
    }

    /// Parses a wire code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|period| period.code().eq_ignore_ascii_case(code))
    }
}

impl std::fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_match_period_length() {
        assert_eq!(BillingPeriod::Monthly.months(), 1);
        assert_eq!(BillingPeriod::Trimester.months(), 3);
        assert_eq!(BillingPeriod::Semester.months(), 6);
        assert_eq!(BillingPeriod::Yearly.months(), 12);
    }

    #[test]
    fn all_is_in_display_order() {
        let months: Vec<u32> = BillingPeriod::ALL.iter().map(|p| p.months()).collect();
        assert_eq!(months, vec![1, 3, 6, 12]);
    }

    #[test]
    fn from_code_is_case_insensitive() {
        assert_eq!(BillingPeriod::from_code("yearly"), Some(BillingPeriod::Yearly));
        assert_eq!(BillingPeriod::from_code(" SEMESTER "), Some(BillingPeriod::Semester));
        assert_eq!(BillingPeriod::from_code("WEEKLY"), None);
    }

    #[test]
    fn period_serializes_screaming_case() {
        let json = serde_json::to_string(&BillingPeriod::Trimester).unwrap();
        assert_eq!(json, "\"TRIMESTER\"");
    }

    #[test]
    fn period_deserializes_from_screaming_case() {
        let period: BillingPeriod = serde_json::from_str("\"YEARLY\"").unwrap();
        assert_eq!(period, BillingPeriod::Yearly);
    }
}
