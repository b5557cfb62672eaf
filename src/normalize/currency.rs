// src/normalize/currency.rs

use crate::error::NormalizeError;
use crate::report::{Issue, Reporter};

use super::is_blank;

const CURRENCY_SYMBOL: char = '€';

/// Unit suffixes in the order they are tried, with their power of ten.
const SUFFIXES: &[(&str, u32)] = &[("m", 6), ("k", 3), ("bn", 9)];

/// Parse text like `€944.70m`, `€500k`, `€1.35bn` or `123` into whole euros.
///
/// Empty text and `-` are zero. Fractions left after scaling are truncated
/// toward zero.
pub fn parse_currency(text: &str) -> Result<i64, NormalizeError> {
    let text = text.trim();
    if is_blank(text) {
        return Ok(0);
    }
    let fail = || NormalizeError::Currency(text.to_string());

    if !text.chars().any(|c| c.is_ascii_digit()) {
        return Err(fail());
    }

    let has_marker =
        text.contains(CURRENCY_SYMBOL) || SUFFIXES.iter().any(|(s, _)| text.contains(s));
    if !has_marker {
        return scale(text, 0).ok_or_else(fail);
    }

    let amount = text.replace(CURRENCY_SYMBOL, "");
    let amount = amount.trim();
    let (digits, exponent) = SUFFIXES
        .iter()
        .find(|(suffix, _)| amount.contains(suffix))
        .map(|(suffix, exp)| (amount.replace(suffix, ""), *exp))
        .unwrap_or_else(|| (amount.to_string(), 0));

    scale(&digits, exponent).ok_or_else(fail)
}

/// [`parse_currency`], reporting failures and falling back to 0.
pub fn normalize_currency(text: &str, reporter: &dyn Reporter) -> i64 {
    parse_currency(text).unwrap_or_else(|e| {
        reporter.report(Issue::Normalize(e));
        0
    })
}

/// `number * 10^exponent`, truncated toward zero.
///
/// Plain decimals are scaled digit by digit so `2.01` millions is exactly
/// 2,010,000. Anything else `f64` accepts (exponent forms, huge values)
/// goes through floating point.
fn scale(number: &str, exponent: u32) -> Option<i64> {
    let number = number.trim();
    scale_decimal(number, exponent).or_else(|| {
        number
            .parse::<f64>()
            .ok()
            .map(|v| v * 10f64.powi(exponent as i32))
            .filter(|v| v.is_finite())
            .map(|v| v.trunc() as i64)
    })
}

fn scale_decimal(number: &str, exponent: u32) -> Option<i64> {
    let (negative, unsigned) = match number.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, number.strip_prefix('+').unwrap_or(number)),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return None;
    }

    let width = exponent as usize;
    let kept: String = fraction.chars().take(width).collect();
    let fraction = if width == 0 {
        0
    } else {
        format!("{:0<width$}", kept, width = width).parse::<i64>().ok()?
    };
    let whole = if whole.is_empty() { 0 } else { whole.parse::<i64>().ok()? };

    let magnitude = whole
        .checked_mul(10i64.checked_pow(exponent)?)?
        .checked_add(fraction)?;
    Some(if negative { -magnitude } else { magnitude })
}
