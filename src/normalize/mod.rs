// src/normalize/mod.rs
//
// Cell text -> numbers. Every function here is total: bad input becomes a
// zero default plus an issue on the reporter, never a panic.

pub mod currency;
pub mod percentage;

pub use currency::{normalize_currency, parse_currency};
pub use percentage::{normalize_percentage, parse_percentage};

/// Cell text meaning "no data".
pub const PLACEHOLDER: &str = "-";

fn is_blank(text: &str) -> bool {
    text.is_empty() || text == PLACEHOLDER
}
