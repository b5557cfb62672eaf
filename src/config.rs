// src/config.rs

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use std::{path::PathBuf, time::Duration};
use url::Url;

use crate::dates::DATE_FORMAT;
use crate::fetch::{urls, DEFAULT_USER_AGENT};

fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
}

/// Scrape historical club market values into a cumulative CSV file.
#[derive(Parser, Debug, Clone)]
#[command(name = "mvscraper", version)]
pub struct Config {
    /// Start date in format yyyy-mm-dd (snapped to the 1st or 15th)
    #[arg(long, env = "MV_DATE_FROM", default_value = "2024-10-01", value_parser = parse_date)]
    pub date_from: NaiveDate,

    /// End date in format yyyy-mm-dd (inclusive)
    #[arg(long, env = "MV_DATE_TO", default_value = "2025-10-01", value_parser = parse_date)]
    pub date_to: NaiveDate,

    /// Output CSV file; rows are appended across runs
    #[arg(long, env = "MV_OUTPUT_FILE", default_value = "bundesliga_market_values.csv")]
    pub output_file: PathBuf,

    /// Read every snapshot from --local-file instead of the web
    #[arg(long, env = "MV_USE_LOCAL_FILE")]
    pub use_local_file: bool,

    #[arg(long, env = "MV_LOCAL_FILE", default_value = "paste.txt")]
    pub local_file: PathBuf,

    /// Delay between requests in seconds
    #[arg(long, env = "MV_DELAY", default_value_t = 5)]
    pub delay: u64,

    #[arg(long, env = "MV_SITE", default_value = urls::DEFAULT_SITE)]
    pub site: String,

    #[arg(long, env = "MV_LEAGUE_SLUG", default_value = urls::DEFAULT_LEAGUE_SLUG)]
    pub league_slug: String,

    /// Competition code, e.g. L1, GB1, ES1
    #[arg(long, env = "MV_COMPETITION", default_value = urls::DEFAULT_COMPETITION)]
    pub competition: String,

    /// Full table URL; overrides --site, --league-slug and --competition
    #[arg(long, env = "MV_BASE_URL")]
    pub base_url: Option<Url>,

    #[arg(long, env = "MV_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Config {
    /// The undated table URL that snapshot dates are appended to.
    pub fn base_url(&self) -> Result<Url> {
        let url = match &self.base_url {
            Some(url) => url.clone(),
            None => urls::competition_url(&self.site, &self.league_slug, &self.competition)?,
        };
        urls::check_base_url(&url)?;
        Ok(url)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay)
    }
}
