// src/normalize/percentage.rs

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::NormalizeError;
use crate::report::{Issue, Reporter};

use super::is_blank;

static PERCENT_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?\d+\.?\d*\s*%?").expect("percent shape regex should compile"));
static SIGNED_DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(-?\d+\.?\d*)").expect("decimal regex should compile"));

/// Parse text like `5.1 %` or `-3.2%` into `5.1` / `-3.2`.
///
/// The first signed decimal anywhere in the text wins. Empty text and `-`
/// are `0.0`.
pub fn parse_percentage(text: &str) -> Result<f64, NormalizeError> {
    let text = text.trim();
    if is_blank(text) {
        return Ok(0.0);
    }
    if !text.contains('%') && !PERCENT_SHAPE.is_match(text) {
        return Err(NormalizeError::Percentage(text.to_string()));
    }

    Ok(SIGNED_DECIMAL
        .captures(text)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .unwrap_or(0.0))
}

/// [`parse_percentage`], reporting failures and falling back to 0.0.
pub fn normalize_percentage(text: &str, reporter: &dyn Reporter) -> f64 {
    parse_percentage(text).unwrap_or_else(|e| {
        reporter.report(Issue::Normalize(e));
        0.0
    })
}
