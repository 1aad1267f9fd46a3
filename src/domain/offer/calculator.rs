//! Offer Pricing Calculator - the single authoritative pricing implementation.
//!
//! Every operation is pure and total: missing or invalid prices count as zero
//! and degenerate selections produce zero-based results instead of errors.
//! Selection checks live in [`super::Selection`].

use super::multiplier::subject_multiplier;
use super::quote::{PeriodOption, PriceQuote};
use super::{BillingPeriod, Offer};
use crate::domain::foundation::Percentage;

/// Calculator for offer prices and promo banner figures.
pub struct PricingCalculator;

impl PricingCalculator {
    /// Price of one billing cycle of `period`.
    ///
    /// Zero when the offer does not sell that period; callers restrict
    /// selection through [`PricingCalculator::available_periods`].
    pub fn unit_price_for_period(offer: &Offer, period: BillingPeriod) -> f64 {
        offer.price_for(period)
    }

    /// Like [`PricingCalculator::unit_price_for_period`], for a raw period
    /// code. Unrecognized codes price as monthly.
    pub fn unit_price_for_code(offer: &Offer, code: &str) -> f64 {
        let period = BillingPeriod::from_code(code).unwrap_or(BillingPeriod::Monthly);
        Self::unit_price_for_period(offer, period)
    }

    /// Subject multiplier as applied to this offer.
    ///
    /// All-subjects offers charge the flat period price.
    pub fn multiplier(offer: &Offer, period: BillingPeriod, subject_count: u32) -> f64 {
        if offer.all_subjects {
            1.0
        } else {
            subject_multiplier(period, subject_count)
        }
    }

    /// Amount due: `floor(unit price * multiplier)`.
    pub fn total_price(offer: &Offer, period: BillingPeriod, subject_count: u32) -> u64 {
        floor_amount(
            Self::unit_price_for_period(offer, period)
                * Self::multiplier(offer, period, subject_count),
        )
    }

    /// What the same selection would cost at the plain monthly rate:
    /// `floor(monthly price * months * multiplier)`.
    pub fn original_price(offer: &Offer, period: BillingPeriod, subject_count: u32) -> u64 {
        floor_amount(
            offer.monthly()
                * f64::from(period.months())
                * Self::multiplier(offer, period, subject_count),
        )
    }

    /// Whether the selection is cheaper than its monthly-rate equivalent.
    pub fn has_promo(offer: &Offer, period: BillingPeriod, subject_count: u32) -> bool {
        if Self::is_free_offer(offer) || offer.monthly() == 0.0 {
            return false;
        }
        Self::total_price(offer, period, subject_count)
            < Self::original_price(offer, period, subject_count)
    }

    /// An offer is free when its legacy price is exactly zero or it sells no
    /// period.
    pub fn is_free_offer(offer: &Offer) -> bool {
        offer.price == Some(0.0)
            || BillingPeriod::ALL
                .iter()
                .all(|period| offer.price_for(*period) == 0.0)
    }

    /// Periods with a positive price, in display order.
    pub fn available_periods(offer: &Offer) -> Vec<PeriodOption> {
        BillingPeriod::ALL
            .into_iter()
            .filter_map(|period| {
                let price = offer.price_for(period);
                (price > 0.0).then(|| PeriodOption {
                    period,
                    label: period.label().to_string(),
                    price,
                })
            })
            .collect()
    }

    /// Period preselected when a purchase dialog opens.
    pub fn default_period(offer: &Offer) -> Option<BillingPeriod> {
        BillingPeriod::ALL
            .into_iter()
            .find(|period| offer.price_for(*period) > 0.0)
    }

    /// All pricing figures for one selection.
    ///
    /// Free offers always yield [`PriceQuote::free`].
    pub fn quote(offer: &Offer, period: BillingPeriod, subject_count: u32) -> PriceQuote {
        if Self::is_free_offer(offer) {
            return PriceQuote::free();
        }

        let total_price = Self::total_price(offer, period, subject_count);
        let original_price = Self::original_price(offer, period, subject_count);
        let has_promo = Self::has_promo(offer, period, subject_count);
        let savings = if has_promo {
            original_price.saturating_sub(total_price)
        } else {
            0
        };

        PriceQuote {
            period: Some(period),
            subject_count,
            unit_price: Self::unit_price_for_period(offer, period),
            multiplier: Self::multiplier(offer, period, subject_count),
            total_price,
            original_price,
            has_promo,
            savings,
            savings_percent: Percentage::from_ratio(savings, original_price),
            is_free: false,
        }
    }
}

fn floor_amount(amount: f64) -> u64 {
    if amount.is_nan() || amount <= 0.0 {
        0
    } else {
        // Saturates at u64::MAX.
        amount.floor() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn full_offer() -> Offer {
        Offer::with_period_prices(100.0, 270.0, 500.0, 900.0)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Reference Scenarios
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn monthly_four_subjects_has_no_promo() {
        let offer = full_offer();
        assert_eq!(PricingCalculator::unit_price_for_period(&offer, BillingPeriod::Monthly), 100.0);
        assert_eq!(PricingCalculator::total_price(&offer, BillingPeriod::Monthly, 4), 350);
        assert_eq!(PricingCalculator::original_price(&offer, BillingPeriod::Monthly, 4), 350);
        assert!(!PricingCalculator::has_promo(&offer, BillingPeriod::Monthly, 4));
    }

    #[test]
    fn yearly_three_subjects_shows_savings() {
        let offer = full_offer();
        let quote = PricingCalculator::quote(&offer, BillingPeriod::Yearly, 3);

        assert_eq!(quote.unit_price, 900.0);
        assert_eq!(quote.multiplier, 2.25);
        assert_eq!(quote.total_price, 2025);
        assert_eq!(quote.original_price, 2700);
        assert!(quote.has_promo);
        assert_eq!(quote.savings, 675);
        assert_eq!(quote.savings_percent.value(), 25);
    }

    #[test]
    fn zero_price_offer_is_free() {
        let offer = Offer::default().with_price(0.0);
        assert!(PricingCalculator::is_free_offer(&offer));
        assert_eq!(
            PricingCalculator::quote(&offer, BillingPeriod::Monthly, 1),
            PriceQuote::free()
        );
    }

    #[test]
    fn offer_with_all_zero_periods_is_free_regardless_of_price() {
        let offer = Offer::with_period_prices(0.0, 0.0, 0.0, 0.0).with_price(49.0);
        assert!(PricingCalculator::is_free_offer(&offer));

        let offer = Offer::with_period_prices(0.0, 0.0, 0.0, 0.0);
        assert!(PricingCalculator::is_free_offer(&offer));
    }

    #[test]
    fn only_an_exact_zero_legacy_price_is_free() {
        for json in [
            r#"{"price": -1, "monthlyPrice": 100, "yearlyPrice": 900}"#,
            r#"{"price": -0.5, "monthlyPrice": 100}"#,
            r#"{"price": "0", "monthlyPrice": 100}"#,
        ] {
            let offer: Offer = serde_json::from_str(json).unwrap();
            assert!(!PricingCalculator::is_free_offer(&offer), "{} read as free", json);
        }

        let offer: Offer = serde_json::from_str(r#"{"price": 0, "monthlyPrice": 100}"#).unwrap();
        assert!(PricingCalculator::is_free_offer(&offer));
    }

    #[test]
    fn unusable_prices_from_json_are_not_offered() {
        let offer: Offer = serde_json::from_str(
            r#"{"monthlyPrice": null, "trimesterPrice": "abc", "yearlyPrice": 900}"#,
        )
        .unwrap();

        let periods: Vec<BillingPeriod> = PricingCalculator::available_periods(&offer)
            .into_iter()
            .map(|option| option.period)
            .collect();
        assert_eq!(periods, vec![BillingPeriod::Yearly]);
        assert_eq!(PricingCalculator::default_period(&offer), Some(BillingPeriod::Yearly));
    }

    #[test]
    fn monthly_only_offer_two_subjects() {
        let offer = Offer::with_period_prices(50.0, 0.0, 0.0, 0.0);
        let quote = PricingCalculator::quote(&offer, BillingPeriod::Monthly, 2);

        assert_eq!(quote.multiplier, 2.0);
        assert_eq!(quote.total_price, 100);
        assert_eq!(quote.original_price, 100);
        assert!(!quote.has_promo);
        assert_eq!(quote.savings, 0);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Operations
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn unknown_period_code_prices_as_monthly() {
        let offer = full_offer();
        assert_eq!(PricingCalculator::unit_price_for_code(&offer, "WEEKLY"), 100.0);
        assert_eq!(PricingCalculator::unit_price_for_code(&offer, "semester"), 500.0);
    }

    #[test]
    fn total_price_floors_fractional_amounts() {
        let offer = Offer::with_period_prices(33.3, 0.0, 0.0, 99.9);
        // 33.3 * 3.5 = 116.55
        assert_eq!(PricingCalculator::total_price(&offer, BillingPeriod::Monthly, 4), 116);
        // 99.9 * 1.5 = 149.85
        assert_eq!(PricingCalculator::total_price(&offer, BillingPeriod::Yearly, 2), 149);
    }

    #[test]
    fn all_subjects_offer_charges_flat_price() {
        let offer = full_offer().with_all_subjects();
        assert_eq!(PricingCalculator::total_price(&offer, BillingPeriod::Yearly, 4), 900);
        assert_eq!(PricingCalculator::original_price(&offer, BillingPeriod::Yearly, 4), 1200);
        assert!(PricingCalculator::has_promo(&offer, BillingPeriod::Yearly, 4));
    }

    #[test]
    fn unavailable_period_prices_to_zero() {
        let offer = Offer::with_period_prices(50.0, 0.0, 0.0, 0.0);
        assert_eq!(PricingCalculator::total_price(&offer, BillingPeriod::Yearly, 2), 0);
        assert_eq!(PricingCalculator::original_price(&offer, BillingPeriod::Yearly, 2), 900);
    }

    #[test]
    fn no_promo_without_monthly_price() {
        let offer = Offer::with_period_prices(0.0, 0.0, 0.0, 900.0);
        assert!(!PricingCalculator::has_promo(&offer, BillingPeriod::Yearly, 3));
        assert_eq!(PricingCalculator::original_price(&offer, BillingPeriod::Yearly, 3), 0);
    }

    #[test]
    fn free_flag_suppresses_promo_even_with_prices() {
        let offer = full_offer().with_price(0.0);
        assert!(!PricingCalculator::has_promo(&offer, BillingPeriod::Yearly, 3));
    }

    #[test]
    fn available_periods_skip_unpriced_periods() {
        let offer = Offer::with_period_prices(100.0, 0.0, 500.0, 0.0);
        let periods = PricingCalculator::available_periods(&offer);

        assert_eq!(periods.len(), 2);
        assert_eq!(periods[0].period, BillingPeriod::Monthly);
        assert_eq!(periods[0].label, "Monthly");
        assert_eq!(periods[1].period, BillingPeriod::Semester);
        assert_eq!(periods[1].price, 500.0);
    }

    #[test]
    fn default_period_is_first_available() {
        let offer = Offer::with_period_prices(0.0, 270.0, 500.0, 900.0);
        assert_eq!(PricingCalculator::default_period(&offer), Some(BillingPeriod::Trimester));
        assert_eq!(PricingCalculator::default_period(&Offer::default()), None);
    }

    #[test]
    fn floor_amount_saturates_and_clamps() {
        assert_eq!(floor_amount(f64::INFINITY), u64::MAX);
        assert_eq!(floor_amount(-3.0), 0);
        assert_eq!(floor_amount(f64::NAN), 0);
        assert_eq!(floor_amount(2.999), 2);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Properties
    // ════════════════════════════════════════════════════════════════════════════

    fn any_period() -> impl Strategy<Value = BillingPeriod> {
        prop::sample::select(BillingPeriod::ALL.to_vec())
    }

    fn any_price() -> impl Strategy<Value = f64> {
        prop_oneof![Just(0.0), 0.0f64..100_000.0]
    }

    fn any_offer() -> impl Strategy<Value = Offer> {
        (any_price(), any_price(), any_price(), any_price(), any::<bool>()).prop_map(
            |(m, t, s, y, all)| {
                let offer = Offer::with_period_prices(m, t, s, y);
                if all {
                    offer.with_all_subjects()
                } else {
                    offer
                }
            },
        )
    }

    proptest! {
        #[test]
        fn non_yearly_small_counts_are_linear(
            price in 0.0f64..100_000.0,
            count in 1u32..=3,
            period in prop::sample::select(vec![
                BillingPeriod::Monthly,
                BillingPeriod::Trimester,
                BillingPeriod::Semester,
            ]),
        ) {
            let offer = Offer::with_period_prices(price, price, price, price);
            let expected = (price * f64::from(count)).floor() as u64;
            prop_assert_eq!(PricingCalculator::total_price(&offer, period, count), expected);
        }

        #[test]
        fn free_offers_never_show_promo(
            offer in any_offer(),
            period in any_period(),
            count in 0u32..10,
        ) {
            if PricingCalculator::is_free_offer(&offer) {
                prop_assert!(!PricingCalculator::has_promo(&offer, period, count));
            }
        }

        #[test]
        fn available_periods_only_list_positive_prices(offer in any_offer()) {
            for option in PricingCalculator::available_periods(&offer) {
                prop_assert!(option.price > 0.0);
                prop_assert_eq!(option.price, offer.price_for(option.period));
            }
        }

        #[test]
        fn free_iff_no_available_period(offer in any_offer()) {
            prop_assert_eq!(
                PricingCalculator::is_free_offer(&offer),
                PricingCalculator::available_periods(&offer).is_empty()
            );
        }

        #[test]
        fn savings_never_exceed_original(
            offer in any_offer(),
            period in any_period(),
            count in 1u32..8,
        ) {
            let quote = PricingCalculator::quote(&offer, period, count);
            prop_assert!(quote.savings <= quote.original_price);
            prop_assert_eq!(quote.has_promo, quote.savings > 0);
        }
    }
}
