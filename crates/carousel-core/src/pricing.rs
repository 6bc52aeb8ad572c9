//! Price arithmetic and Turkish-locale price formatting.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Currency suffix appended to every formatted price.
pub const CURRENCY_SUFFIX: &str = "TL";

/// Maximum fraction digits kept when formatting, matching the `tr-TR`
/// number format defaults.
const MAX_FRACTION_DIGITS: u32 = 3;

/// Whole-number discount percentage of `current` relative to `original`.
///
/// Returns `0` when there is no original price, when it is zero, or when the
/// current price is not strictly below it. Halves round away from zero.
#[must_use]
pub fn calculate_discount(original: Option<Decimal>, current: Decimal) -> u32 {
    let Some(original) = original else {
        return 0;
    };
    if original.is_zero() || current >= original {
        return 0;
    }

    let percent = (original - current) / original * Decimal::ONE_HUNDRED;
    percent
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

/// Formats `value` with `.` thousands separators, `,` as the decimal mark,
/// at most three fraction digits, and the ` TL` suffix.
///
/// `1234` → `"1.234 TL"`, `1234.5` → `"1.234,5 TL"`.
#[must_use]
pub fn format_price(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push(',');
        out.push_str(fraction);
    }
    out.push(' ');
    out.push_str(CURRENCY_SUFFIX);
    out
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
