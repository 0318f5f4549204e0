//! Fixed-locale (en-US, USD) number formatting and tolerant parsing.
//!
//! Every formatter accepts any `f64`; non-finite values render as the zero
//! string rather than leaking `NaN` or `inf` into the page.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

const CURRENCY_SYMBOL: &str = "$";
const GROUP_SEPARATOR: char = ',';

lazy_static! {
    /// Longest numeric prefix `parseFloat` would accept once non-numeric
    /// characters are gone: optional minus, digits, optional fraction.
    static ref NUMERIC_PREFIX_REGEX: Regex =
        Regex::new(r"^-?(\d+\.?\d*|\.\d+)").expect("Invalid regex pattern");
}

/// Replaces `NaN` and infinities with zero.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Rounds half toward positive infinity, matching the page's `Math.round`.
pub fn round_half_up(value: f64) -> f64 {
    // `value + 0.5` can itself round up just below a half
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Renders `amount` as whole dollars, e.g. `1234.9` -> `"$1,235"`.
pub fn format_whole_currency(amount: f64) -> String {
    format_currency(amount, 0)
}

/// Renders `amount` with exactly two decimals, e.g. `416.666` -> `"$416.67"`.
pub fn format_currency_with_cents(amount: f64) -> String {
    format_currency(amount, DISPLAY_DECIMAL_PRECISION)
}

/// Thousands-grouped integer, e.g. `1234567.4` -> `"1,234,567"`.
pub fn format_integer(amount: f64) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }
    let rounded = round_half_up(amount);
    if rounded == 0.0 {
        return "0".to_string();
    }
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(&digits))
}

/// Strips everything except digits, `.` and `-`, then parses the longest
/// numeric prefix. Returns 0 when nothing numeric remains.
///
/// Pre-formatted values round-trip: `"$350,000"` parses to `350000.0`.
pub fn parse_loose_number(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    NUMERIC_PREFIX_REGEX
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value != 0.0)
        .unwrap_or(0.0)
}

/// Integer flavour of [`parse_loose_number`]; the fraction is truncated.
pub fn parse_loose_integer(text: &str) -> i64 {
    // `as` saturates for out-of-range floats
    parse_loose_number(text).trunc() as i64
}

/// Rounds `amount` to `dp` places (half away from zero) as a `Decimal`.
///
/// Rounding works on the shortest decimal form of the float, so `1.005`
/// rounds to `1.01` even though its binary value sits just below.
/// Returns `None` for non-finite input or magnitudes beyond the decimal range.
pub fn to_display_decimal(amount: f64, dp: u32) -> Option<Decimal> {
    if !amount.is_finite() {
        return None;
    }
    amount
        .to_string()
        .parse::<Decimal>()
        .ok()
        .map(|value| value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
}

fn format_currency(amount: f64, dp: u32) -> String {
    let amount = finite_or_zero(amount);
    let (negative, body) = match to_display_decimal(amount, dp) {
        Some(rounded) => (
            rounded.is_sign_negative() && !rounded.is_zero(),
            format!("{:.*}", dp as usize, rounded.abs()),
        ),
        None => {
            let body = format!("{:.*}", dp as usize, amount.abs());
            let is_zero = body.chars().all(|c| c == '0' || c == '.');
            (amount < 0.0 && !is_zero, body)
        }
    };

    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };

    let mut out = String::with_capacity(body.len() + 4);
    if negative {
        out.push('-');
    }
    out.push_str(CURRENCY_SYMBOL);
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}
