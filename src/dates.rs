// src/dates.rs

use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::{fmt, str::FromStr};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date the site publishes a market value table for:
/// always the 1st or the 15th of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SnapshotDate(NaiveDate);

impl SnapshotDate {
    /// Accepts only dates falling on day 1 or day 15.
    pub fn new(date: NaiveDate) -> Option<Self> {
        matches!(date.day(), 1 | 15).then_some(Self(date))
    }

    /// Snap to day 1 if the day is before the 15th, otherwise to day 15.
    /// Never leaves the month.
    pub fn snap(date: NaiveDate) -> Self {
        let day = if date.day() < 15 { 1 } else { 15 };
        // day 1 and day 15 exist in every month
        Self(date.with_day(day).unwrap_or(date))
    }

    /// The next canonical point: 1st -> 15th, 15th -> 1st of the following month.
    pub fn next(self) -> Option<Self> {
        let d = self.0;
        let next = if d.day() == 1 {
            d.with_day(15)?
        } else if d.month() == 12 {
            NaiveDate::from_ymd_opt(d.year() + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(d.year(), d.month() + 1, 1)?
        };
        Some(Self(next))
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for SnapshotDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for SnapshotDate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .with_context(|| format!("parsing date '{}' (expected yyyy-mm-dd)", s))?;
        match Self::new(date) {
            Some(d) => Ok(d),
            None => bail!("date must have day as either 01 or 15, got '{}'", s),
        }
    }
}

impl Serialize for SnapshotDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// All snapshot dates between `start` and `end` inclusive, in order.
///
/// `start` is snapped down to the 1st or the 15th first, so the first date
/// may precede `start`. A reversed range yields nothing.
pub fn generate_snapshot_dates(start: NaiveDate, end: NaiveDate) -> Vec<SnapshotDate> {
    let mut dates = Vec::new();
    if start > end {
        return dates;
    }

    let mut current = Some(SnapshotDate::snap(start));
    while let Some(date) = current {
        if date.as_naive() > end {
            break;
        }
        dates.push(date);
        current = date.next();
    }
    dates
}
