//! Subject bundling multipliers.
//!
//! Buying several subjects together is cheaper than buying them one by one.
//! The yearly period carries the steepest curve.
//!
//! | Subjects | Yearly | Other periods |
//! |----------|--------|---------------|
//! | 1 | 1 | 1 |
//! | 2 | 1.5 | 2 |
//! | 3 | 2.25 | 3 |
//! | 4 | 3 | 3.5 |
//! | n > 4 | n | n |

use super::BillingPeriod;

const YEARLY_MULTIPLIERS: [f64; 4] = [1.0, 1.5, 2.25, 3.0];

const FOUR_SUBJECT_MULTIPLIER: f64 = 3.5;

/// Price multiplier for buying `subject_count` subjects over `period`.
///
/// Counts outside the discount table scale linearly.
pub fn subject_multiplier(period: BillingPeriod, subject_count: u32) -> f64 {
    match (period, subject_count) {
        (BillingPeriod::Yearly, 1..=4) => YEARLY_MULTIPLIERS[(subject_count - 1) as usize],
        (BillingPeriod::Yearly, _) => f64::from(subject_count),
        (_, 4) => FOUR_SUBJECT_MULTIPLIER,
        (_, _) => f64::from(subject_count),
    }
}
