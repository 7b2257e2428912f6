//! Parking Fee Calculator
//!
//! Maps elapsed minutes and a pricing table to the amount due.
//! All arithmetic is done in `Decimal`; rounding to centavos is left to the
//! display/persistence boundary (`shared::money`).
//!
//! Tier rules:
//! 1. Elapsed time within the tolerance window is free.
//! 2. The shortest period is the base tier and is always charged once.
//! 3. Time beyond the base tier is charged in blocks of the longest period
//!    (last after sorting), rounding partial blocks up.
//! 4. The total is clamped to `max_value` when a cap is configured.
//!
//! Periods strictly between the first and last sorted tier are never used.
//! Production tables are priced this way, so the behavior is kept as is.

use rust_decimal::prelude::*;
use serde::Serialize;
use shared::models::{PricingPeriod, PricingTable};

/// Itemized result of a fee calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingBreakdown {
    /// Elapsed minutes after clamping negatives to zero
    pub elapsed_minutes: i64,
    /// Session ended inside the grace window
    pub within_tolerance: bool,
    /// Base tier (shortest period)
    pub base_period_id: Option<i64>,
    #[serde(with = "rust_decimal::serde::float")]
    pub base_amount: Decimal,
    /// Overflow tier (longest period), when charged
    pub additional_period_id: Option<i64>,
    /// Number of overflow blocks charged
    pub additional_count: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub additional_amount: Decimal,
    /// Amount before the cap
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    /// Cap lowered the amount
    pub capped: bool,
    /// Amount due
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl PricingBreakdown {
    fn free(elapsed_minutes: i64, within_tolerance: bool) -> Self {
        Self {
            elapsed_minutes,
            within_tolerance,
            base_period_id: None,
            base_amount: Decimal::ZERO,
            additional_period_id: None,
            additional_count: 0,
            additional_amount: Decimal::ZERO,
            subtotal: Decimal::ZERO,
            capped: false,
            amount: Decimal::ZERO,
        }
    }
}

/// Ceiling division for a positive numerator and denominator
#[inline]
fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    numerator / denominator + i64::from(numerator % denominator != 0)
}

/// Saturated value carrying the sign of `direction`
#[inline]
fn saturated(direction: Decimal) -> Decimal {
    if direction.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

/// Sort periods by duration, shortest first (stable on ties)
pub fn sort_periods_by_minutes(periods: &[PricingPeriod]) -> Vec<&PricingPeriod> {
    let mut sorted: Vec<&PricingPeriod> = periods.iter().collect();
    sorted.sort_by_key(|p| p.minutes);
    sorted
}

/// Calculate the amount due with its itemization
///
/// Negative `elapsed_minutes` (clock skew between terminals) is treated as 0.
pub fn calculate_breakdown(elapsed_minutes: i64, table: &PricingTable) -> PricingBreakdown {
    let elapsed = elapsed_minutes.max(0);

    if elapsed <= table.tolerance_minutes {
        return PricingBreakdown::free(elapsed, true);
    }

    let sorted = sort_periods_by_minutes(&table.periods);
    let (Some(base), Some(last)) = (sorted.first().copied(), sorted.last().copied()) else {
        tracing::debug!(
            pricing_table_id = table.id,
            "Pricing table has no periods, charging nothing"
        );
        return PricingBreakdown::free(elapsed, false);
    };

    let base_amount = base.price;
    let remaining = elapsed.saturating_sub(base.minutes);

    let mut additional_period_id = None;
    let mut additional_count = 0;
    let mut additional_amount = Decimal::ZERO;
    let mut overflowed = false;

    if remaining > 0 && sorted.len() > 1 {
        let block = if last.minutes > 0 {
            last.minutes
        } else {
            tracing::warn!(
                pricing_table_id = table.id,
                period_id = last.id,
                minutes = last.minutes,
                "Non-positive period length, billing per minute"
            );
            1
        };
        additional_count = ceil_div(remaining, block);
        additional_amount = Decimal::from(additional_count)
            .checked_mul(last.price)
            .unwrap_or_else(|| {
                overflowed = true;
                saturated(last.price)
            });
        additional_period_id = Some(last.id);
    }

    let subtotal = base_amount
        .checked_add(additional_amount)
        .unwrap_or_else(|| {
            overflowed = true;
            saturated(base_amount)
        })
        .max(Decimal::ZERO);

    if overflowed {
        tracing::warn!(
            pricing_table_id = table.id,
            elapsed,
            additional_count,
            "Parking fee exceeds decimal range, saturating"
        );
    }

    let capped = table.has_cap() && subtotal > table.max_value;
    let amount = if capped { table.max_value } else { subtotal };

    tracing::debug!(
        pricing_table_id = table.id,
        elapsed,
        %subtotal,
        %amount,
        capped,
        "Parking fee calculated"
    );

    PricingBreakdown {
        elapsed_minutes: elapsed,
        within_tolerance: false,
        base_period_id: Some(base.id),
        base_amount,
        additional_period_id,
        additional_count,
        additional_amount,
        subtotal,
        capped,
        amount,
    }
}

/// Calculate the amount due for `elapsed_minutes` under `table`
#[inline]
pub fn calculate_amount(elapsed_minutes: i64, table: &PricingTable) -> Decimal {
    calculate_breakdown(elapsed_minutes, table).amount
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(id: i64, minutes: i64, price: i64) -> PricingPeriod {
        PricingPeriod {
            id,
            name: format!("period-{}", id),
            minutes,
            price: Decimal::from(price),
            sort_order: id as i32,
        }
    }

    /// first {60, 10}, last {60, 7}, tolerance 10, cap 50
    fn standard_table() -> PricingTable {
        PricingTable {
            id: 1,
            name: "Carro".to_string(),
            vehicle_type_id: 1,
            is_default: true,
            tolerance_minutes: 10,
            max_value: Decimal::from(50),
            periods: vec![period(1, 60, 10), period(2, 60, 7)],
        }
    }

    #[test]
    fn test_within_tolerance_is_free() {
        let table = standard_table();
        assert_eq!(calculate_amount(0, &table), Decimal::ZERO);
        assert_eq!(calculate_amount(5, &table), Decimal::ZERO);
        assert_eq!(calculate_amount(10, &table), Decimal::ZERO);

        let b = calculate_breakdown(10, &table);
        assert!(b.within_tolerance);
        assert!(b.base_period_id.is_none());
    }

    #[test]
    fn test_just_past_tolerance_charges_base_tier() {
        let table = standard_table();
        assert_eq!(calculate_amount(11, &table), Decimal::from(10));
    }

    #[test]
    fn test_exact_base_tier() {
        let table = standard_table();
        let b = calculate_breakdown(60, &table);
        assert_eq!(b.amount, Decimal::from(10));
        assert_eq!(b.additional_count, 0);
        assert!(b.additional_period_id.is_none());
    }

    #[test]
    fn test_partial_additional_block_rounds_up() {
        let table = standard_table();
        // 10 + ceil(30/60) * 7
        assert_eq!(calculate_amount(90, &table), Decimal::from(17));
        // 10 + ceil(1/60) * 7
        assert_eq!(calculate_amount(61, &table), Decimal::from(17));
        // 10 + ceil(90/60) * 7
        let b = calculate_breakdown(150, &table);
        assert_eq!(b.additional_count, 2);
        assert_eq!(b.additional_amount, Decimal::from(14));
        assert_eq!(b.amount, Decimal::from(24));
    }

    #[test]
    fn test_cap_clamps_amount() {
        let table = standard_table();
        let b = calculate_breakdown(1000, &table);
        // 10 + ceil(940/60) * 7 = 10 + 16 * 7
        assert_eq!(b.subtotal, Decimal::from(122));
        assert!(b.capped);
        assert_eq!(b.amount, Decimal::from(50));
    }

    #[test]
    fn test_zero_cap_is_unlimited() {
        let mut table = standard_table();
        table.max_value = Decimal::ZERO;
        let b = calculate_breakdown(1000, &table);
        assert!(!b.capped);
        assert_eq!(b.amount, Decimal::from(122));
    }

    #[test]
    fn test_amount_equal_to_cap_is_not_capped() {
        let mut table = standard_table();
        table.max_value = Decimal::from(17);
        let b = calculate_breakdown(90, &table);
        assert!(!b.capped);
        assert_eq!(b.amount, Decimal::from(17));
    }

    #[test]
    fn test_empty_periods_charge_nothing() {
        let mut table = standard_table();
        table.periods.clear();
        for m in [0, 11, 60, 1000, 100_000] {
            assert_eq!(calculate_amount(m, &table), Decimal::ZERO);
        }
        let b = calculate_breakdown(500, &table);
        assert!(!b.within_tolerance);
        assert!(b.base_period_id.is_none());
    }

    #[test]
    fn test_negative_elapsed_treated_as_zero() {
        let mut table = standard_table();
        table.tolerance_minutes = 0;
        let b = calculate_breakdown(-5, &table);
        assert_eq!(b.elapsed_minutes, 0);
        assert!(b.within_tolerance);
        assert_eq!(b.amount, Decimal::ZERO);
    }

    #[test]
    fn test_zero_tolerance_charges_first_minute() {
        let mut table = standard_table();
        table.tolerance_minutes = 0;
        assert_eq!(calculate_amount(1, &table), Decimal::from(10));
    }

    #[test]
    fn test_single_period_never_charges_overflow() {
        let mut table = standard_table();
        table.periods = vec![period(1, 60, 10)];
        table.max_value = Decimal::ZERO;
        assert_eq!(calculate_amount(600, &table), Decimal::from(10));
    }

    #[test]
    fn test_periods_sorted_by_minutes_not_input_order() {
        let mut table = standard_table();
        // daily block listed first, 30-minute base listed last
        table.periods = vec![period(1, 1440, 40), period(2, 30, 5)];
        table.max_value = Decimal::ZERO;
        // 5 + ceil(10/1440) * 40
        let b = calculate_breakdown(40, &table);
        assert_eq!(b.base_period_id, Some(2));
        assert_eq!(b.additional_period_id, Some(1));
        assert_eq!(b.amount, Decimal::from(45));
    }

    #[test]
    fn test_middle_periods_are_inert() {
        let mut table = standard_table();
        table.max_value = Decimal::ZERO;
        table.periods = vec![period(1, 30, 5), period(2, 60, 100), period(3, 120, 8)];
        // 5 + ceil(150/120) * 8, the 60-minute tier is ignored
        let b = calculate_breakdown(180, &table);
        assert_eq!(b.base_period_id, Some(1));
        assert_eq!(b.additional_period_id, Some(3));
        assert_eq!(b.additional_count, 2);
        assert_eq!(b.amount, Decimal::from(21));
    }

    #[test]
    fn test_decimal_prices_accumulate_exactly() {
        let mut table = standard_table();
        table.max_value = Decimal::ZERO;
        table.tolerance_minutes = 0;
        table.periods = vec![
            PricingPeriod {
                id: 1,
                name: "Primeira hora".to_string(),
                minutes: 60,
                price: Decimal::new(110, 1),
                sort_order: 1,
            },
            PricingPeriod {
                id: 2,
                name: "Hora adicional".to_string(),
                minutes: 60,
                price: Decimal::new(10, 2),
                sort_order: 2,
            },
        ];
        // 11.0 + 1000 * 0.10
        assert_eq!(calculate_amount(60 + 60_000, &table), Decimal::from(111));
    }

    #[test]
    fn test_non_positive_overflow_length_does_not_panic() {
        let mut table = standard_table();
        table.max_value = Decimal::ZERO;
        table.periods = vec![period(1, 0, 1), period(2, 0, 2)];
        // both tiers sort to 0 minutes; overflow billed per minute
        assert_eq!(calculate_amount(30, &table), Decimal::from(61));
    }

    #[test]
    fn test_huge_elapsed_time_saturates_to_cap() {
        let mut table = standard_table();
        table.tolerance_minutes = 0;
        table.periods = vec![period(1, 1, 10), period(2, 1, 10_000_000_000)];
        let b = calculate_breakdown(i64::MAX, &table);
        assert!(b.capped);
        assert_eq!(b.amount, Decimal::from(50));
    }

    #[test]
    fn test_huge_elapsed_time_without_cap_saturates_to_max() {
        let mut table = standard_table();
        table.tolerance_minutes = 0;
        table.max_value = Decimal::ZERO;
        table.periods = vec![period(1, 1, 10), period(2, 1, 10_000_000_000)];
        let b = calculate_breakdown(i64::MAX, &table);
        assert!(!b.capped);
        assert_eq!(b.amount, Decimal::MAX);
    }

    #[test]
    fn test_negative_base_length_does_not_overflow() {
        let mut table = standard_table();
        table.tolerance_minutes = 0;
        table.periods = vec![period(1, i64::MIN, 10), period(2, 60, 7)];
        // remaining saturates at i64::MAX, cap applies
        assert_eq!(calculate_amount(i64::MAX, &table), Decimal::from(50));
    }

    #[test]
    fn test_negative_prices_never_yield_negative_amount() {
        let mut table = standard_table();
        table.periods = vec![period(1, 60, -10), period(2, 60, -7)];
        assert_eq!(calculate_amount(200, &table), Decimal::ZERO);
    }

    #[test]
    fn test_deterministic() {
        let table = standard_table();
        for m in [0, 11, 59, 60, 61, 119, 120, 121, 1000] {
            assert_eq!(
                calculate_breakdown(m, &table),
                calculate_breakdown(m, &table)
            );
        }
    }
}
