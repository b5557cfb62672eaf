// src/fetch/mod.rs

pub mod urls;

use anyhow::{Context, Result};
use reqwest::Client;
use std::path::PathBuf;
use tracing::debug;
use url::Url;

pub use urls::{check_base_url, competition_url, snapshot_url};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Something that returns raw markup for a snapshot URL.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn fetch(&self, url: &Url) -> Result<String>;

    /// Whether the run should pause between requests to this source.
    fn is_remote(&self) -> bool {
        true
    }
}

/// Fetches pages over HTTP.
#[derive(Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .gzip(true)
            .build()
            .context("building HTTP client")?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    async fn fetch(&self, url: &Url) -> Result<String> {
        debug!("Fetching text from {}", url);
        self.client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?
            .error_for_status()
            .with_context(|| format!("Non-success status {}", url))?
            .text()
            .await
            .with_context(|| format!("Reading text from {}", url))
    }
}

/// Serves one local file for every URL.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    path: PathBuf,
}

impl FixtureSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PageSource for FixtureSource {
    async fn fetch(&self, url: &Url) -> Result<String> {
        debug!(path = %self.path.display(), %url, "serving local file");
        tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("reading local file {}", self.path.display()))
    }

    fn is_remote(&self) -> bool {
        false
    }
}
