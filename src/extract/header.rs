// src/extract/header.rs

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::markup::Cell;

pub const RANK_LABEL: &str = "Rank";
pub const CLUB_LABEL: &str = "Club";
pub const VALUE_LABEL: &str = "Value";
pub const PERCENT_MARKER: &str = "%";
pub const HIDDEN_CLASS: &str = "hide";

/// "Value Oct 1, 2024", "value Jan 15, 2023", ...
static DATED_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Value \w+ \d+").expect("value header regex should compile"));

/// How cells under a header are normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Currency,
    Percentage,
    Text,
}

/// Canonical column labels for one table, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ColumnHeader(Vec<String>);

impl ColumnHeader {
    /// Build from visible header cells: canonicalize each label, renumber
    /// repeated `Value` columns and drop any other repeated label.
    pub fn from_cells(cells: &[Cell]) -> Self {
        let mut labels: Vec<String> = Vec::with_capacity(cells.len());
        let mut value_count = 0;

        for cell in cells.iter().filter(|c| !c.has_class(HIDDEN_CLASS)) {
            let label = canonical_label(&cell.text);
            if label == VALUE_LABEL {
                value_count += 1;
                if value_count > 1 {
                    labels.push(format!("{}_{}", VALUE_LABEL, value_count));
                } else {
                    labels.push(label);
                }
            } else if !labels.contains(&label) {
                labels.push(label);
            }
        }
        Self(labels)
    }

    pub fn labels(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.0.iter().position(|l| l == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ColumnHeader {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Map raw header text to its canonical label.
pub fn canonical_label(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        RANK_LABEL.to_string()
    } else if text.contains(CLUB_LABEL) {
        CLUB_LABEL.to_string()
    } else if DATED_VALUE.is_match(text) || text.to_lowercase().contains("value") {
        VALUE_LABEL.to_string()
    } else {
        text.to_string()
    }
}

pub fn column_kind(label: &str) -> ColumnKind {
    if label.contains(VALUE_LABEL) {
        ColumnKind::Currency
    } else if label.contains(PERCENT_MARKER) {
        ColumnKind::Percentage
    } else {
        ColumnKind::Text
    }
}
