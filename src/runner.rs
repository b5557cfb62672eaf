// src/runner.rs

use anyhow::Result;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, instrument};
use url::Url;

use crate::config::Config;
use crate::dates::{generate_snapshot_dates, SnapshotDate};
use crate::error::SnapshotError;
use crate::extract::extract_html;
use crate::fetch::{snapshot_url, FixtureSource, HttpSource, PageSource};
use crate::report::{Issue, Reporter};
use crate::sink::CsvSink;

/// What a run got done.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub attempted: usize,
    pub written: usize,
    pub rows: usize,
    pub failed: Vec<SnapshotDate>,
}

/// Scrapes snapshots one after another into a sink.
pub struct Runner<'r, S> {
    source: S,
    sink: CsvSink,
    base_url: Url,
    delay: Duration,
    reporter: &'r dyn Reporter,
}

impl<'r, S: PageSource> Runner<'r, S> {
    pub fn new(
        source: S,
        sink: CsvSink,
        base_url: Url,
        delay: Duration,
        reporter: &'r dyn Reporter,
    ) -> Self {
        Self {
            source,
            sink,
            base_url,
            delay,
            reporter,
        }
    }

    /// Process `dates` in order. A failed snapshot is reported and skipped.
    pub async fn run(&self, dates: &[SnapshotDate]) -> RunSummary {
        let mut summary = RunSummary::default();
        let total = dates.len();

        for (i, &date) in dates.iter().enumerate() {
            info!("Processing date {}/{}: {}", i + 1, total, date);
            summary.attempted += 1;

            match self.scrape(date).await {
                Ok(rows) => {
                    summary.written += 1;
                    summary.rows += rows;
                }
                Err(error) => {
                    summary.failed.push(date);
                    self.reporter.report(Issue::Snapshot { date, error });
                }
            }

            if i + 1 < total && self.source.is_remote() && !self.delay.is_zero() {
                info!(
                    "Waiting {} seconds before next request...",
                    self.delay.as_secs_f64()
                );
                sleep(self.delay).await;
            }
        }

        summary
    }

    #[instrument(level = "debug", skip(self))]
    async fn scrape(&self, date: SnapshotDate) -> Result<usize, SnapshotError> {
        let url = snapshot_url(&self.base_url, date).map_err(|e| SnapshotError::Transport {
            url: self.base_url.to_string(),
            detail: format!("{:#}", e),
        })?;
        info!("Scraping data from: {}", url);

        let markup = self
            .source
            .fetch(&url)
            .await
            .map_err(|e| SnapshotError::Transport {
                url: url.to_string(),
                detail: format!("{:#}", e),
            })?;

        let result = extract_html(&markup, date, self.reporter)?;
        info!(date = %date, rows = result.rows.len(), "extracted");

        self.sink
            .append(&result)
            .map_err(|e| SnapshotError::Sink {
                path: self.sink.path().to_path_buf(),
                detail: format!("{:#}", e),
            })
    }
}

/// Run everything `config` asks for.
pub async fn run_with_config(config: &Config, reporter: &dyn Reporter) -> Result<RunSummary> {
    let dates = generate_snapshot_dates(config.date_from, config.date_to);
    info!(
        "Will scrape data for {} dates between {} and {}",
        dates.len(),
        config.date_from,
        config.date_to
    );

    let base_url = config.base_url()?;
    let sink = CsvSink::new(&config.output_file);

    let summary = if config.use_local_file {
        let source = FixtureSource::new(&config.local_file);
        Runner::new(source, sink, base_url, config.delay(), reporter)
            .run(&dates)
            .await
    } else {
        let source = HttpSource::new(&config.user_agent)?;
        Runner::new(source, sink, base_url, config.delay(), reporter)
            .run(&dates)
            .await
    };
    Ok(summary)
}
