use anyhow::Result;
use clap::Parser;
use mvscraper::{config::Config, run_with_config, TracingReporter};
use std::env;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()))
    });
    fmt().with_env_filter(env_filter).init();

    // ─── 2) configure ────────────────────────────────────────────────
    let config = Config::parse();
    info!(
        output = %config.output_file.display(),
        local = config.use_local_file,
        "startup"
    );

    // ─── 3) scrape every snapshot ────────────────────────────────────
    let summary = run_with_config(&config, &TracingReporter).await?;

    if summary.failed.is_empty() {
        info!(
            snapshots = summary.written,
            rows = summary.rows,
            "all done"
        );
    } else {
        let failed: Vec<String> = summary.failed.iter().map(ToString::to_string).collect();
        warn!(
            snapshots = summary.written,
            rows = summary.rows,
            failed = ?failed,
            "done with skipped snapshots"
        );
    }
    Ok(())
}
