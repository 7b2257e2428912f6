//! Currency helpers (Brazilian real)
//!
//! Amounts are kept as exact `Decimal` values; rounding to centavos only
//! happens at the display/persistence boundary.

use rust_decimal::prelude::*;

/// Currency precision (centavos)
pub const DECIMAL_PLACES: u32 = 2;

/// Round to 2 decimal places, half away from zero
#[inline]
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as `R$ 1.234,50`
pub fn format_brl(value: Decimal) -> String {
    let rounded = round_currency(value);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    // scale is at most 2 after rounding, so the centavo count fits in i128
    let cents = rounded.mantissa().unsigned_abs()
        * 10_u128.pow(DECIMAL_PLACES.saturating_sub(rounded.scale()));
    let text = cents.to_string();
    let text = format!("{:0>3}", text);
    let (int_part, frac_part) = text.split_at(text.len() - 2);

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-R$ {},{}", grouped, frac_part)
    } else {
        format!("R$ {},{}", grouped, frac_part)
    }
}
