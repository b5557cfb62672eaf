// src/report.rs

use std::{fmt, sync::Mutex};
use tracing::warn;

use crate::dates::SnapshotDate;
use crate::error::{NormalizeError, SnapshotError};

/// Something non-fatal that happened while scraping.
#[derive(Debug, Clone, PartialEq)]
pub enum Issue {
    /// A cell fell back to a zero default.
    Normalize(NormalizeError),
    /// A whole snapshot was skipped.
    Snapshot {
        date: SnapshotDate,
        error: SnapshotError,
    },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::Normalize(e) => write!(f, "{}", e),
            Issue::Snapshot { date, error } => write!(f, "snapshot {}: {}", date, error),
        }
    }
}

/// Where non-fatal issues go. Injected so callers can observe them.
pub trait Reporter: Send + Sync {
    fn report(&self, issue: Issue);
}

/// Turns every issue into a `warn!` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, issue: Issue) {
        match issue {
            Issue::Normalize(e) => warn!(error = %e, "using default value"),
            Issue::Snapshot { date, error } => {
                warn!(date = %date, error = %error, "skipping snapshot")
            }
        }
    }
}

/// Keeps issues in memory.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    issues: Mutex<Vec<Issue>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issues(&self) -> Vec<Issue> {
        self.issues.lock().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.lock().map(|v| v.is_empty()).unwrap_or(true)
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, issue: Issue) {
        if let Ok(mut issues) = self.issues.lock() {
            issues.push(issue);
        }
    }
}
