//! Amount formatting
//!
//! Pure functions turning nutrient amounts into display strings. None of
//! them panic: negative or non-finite input renders as zero, and the result
//! is never an empty string. Unit suffixes are not appended here; rows carry
//! amount and unit separately so the host controls concatenation and
//! localization.

use crate::models::{DisplayPolicy, NutrientValue};

/// Negative and non-finite amounts render as zero
fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Round half away from zero to the given number of decimal places
///
/// Places are capped so the scale factor stays finite.
fn round_to_places(value: f64, places: usize) -> f64 {
    let factor = 10f64.powi(places.min(6) as i32);
    (value * factor).round() / factor
}

/// Render with the given precision, trailing zeros trimmed ("2.0" -> "2")
fn trimmed_decimal(value: f64, places: usize) -> String {
    let mut s = format!("{value:.prec$}", prec = places.min(6));
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

/// Comma-group a non-negative whole amount
fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let first = match digits.len() % 3 {
        0 => 3,
        n => n,
    };
    out.push_str(&digits[..first]);
    let mut idx = first;
    while idx < digits.len() {
        out.push(',');
        out.push_str(&digits[idx..idx + 3]);
        idx += 3;
    }
    out
}

/// Round to `places`, trim trailing zeros, comma-group from 1000 up
///
/// At and above 1000 only the integer part survives, so "1234.6" renders as
/// "1,234".
fn clean_rounded(value: f64, places: usize) -> String {
    let rounded = round_to_places(value, places);
    if rounded < 1000.0 {
        trimmed_decimal(rounded, places)
    } else {
        group_thousands(rounded as u64)
    }
}

/// Format a nutrient amount
///
/// With `decimal_places == 0` the whole-number rendering applies:
/// - exactly zero renders as "0"
/// - anything below 0.1 renders as "< 0.1"
/// - 0.1 up to (but excluding) 0.5 renders with one decimal
/// - 0.5 and above renders as the truncated integer, comma-grouped from
///   1000 up
///
/// With `decimal_places > 0` the amount is rounded half away from zero to
/// that many places and rendered with trailing zeros trimmed; from 1000 up
/// the integer part is comma-grouped and the fraction is dropped.
pub fn format_amount(value: f64, decimal_places: usize) -> String {
    let value = sanitize(value);

    if decimal_places == 0 {
        if value < 0.5 {
            if value == 0.0 {
                "0".to_string()
            } else if value < 0.1 {
                "< 0.1".to_string()
            } else {
                format!("{value:.1}")
            }
        } else {
            group_thousands(value as u64)
        }
    } else {
        clean_rounded(value, decimal_places)
    }
}

/// Format a nutrient amount under a display policy
///
/// While a transition animates, the decimal path renders whole numbers
/// (rounded, not truncated); the whole-number path is unaffected.
pub fn format_amount_with_policy(value: f64, policy: &DisplayPolicy) -> String {
    if policy.decimal_places != 0 && policy.animating {
        clean_rounded(sanitize(value), 0)
    } else {
        format_amount(value, policy.decimal_places)
    }
}

/// Format the energy figure as a truncated integer
///
/// Selects the kilocalorie or kilojoule figure from the value's own energy
/// accessors and applies the same comma grouping from 1000 up.
pub fn format_energy_amount(energy: NutrientValue, in_calories: bool) -> String {
    let amount = if in_calories {
        energy.energy_in_kcal()
    } else {
        energy.energy_in_kj()
    };
    group_thousands(sanitize(amount) as u64)
}

/// Format the serving quantity for the "Amount per" header
///
/// Whole quantities drop the fraction entirely; fractional ones keep their
/// natural representation.
pub fn format_quantity(value: f64) -> String {
    let value = sanitize(value);
    if value >= 1000.0 {
        return group_thousands(value as u64);
    }
    if value == value.trunc() {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
