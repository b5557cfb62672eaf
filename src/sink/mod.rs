// src/sink/mod.rs

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
};
use tracing::info;

use crate::extract::ExtractionResult;

pub const DATE_COLUMN: &str = "Date";

/// Appends snapshot rows to one CSV file across runs.
///
/// The header is written only when the file does not exist yet. The file is
/// reopened and flushed for every snapshot, so rows written before a crash
/// survive it.
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append every row of `result`, returning how many were written.
    pub fn append(&self, result: &ExtractionResult) -> Result<usize> {
        let file_exists = self.path.exists();
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening {}", self.path.display()))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(file);

        if !file_exists {
            let header = std::iter::once(DATE_COLUMN).chain(result.headers.iter());
            writer.write_record(header).context("writing CSV header")?;
        }

        for row in &result.rows {
            let date = row.date.to_string();
            let fields = std::iter::once(date).chain(row.values.iter().map(|v| v.to_field()));
            writer.write_record(fields).context("writing CSV row")?;
        }
        writer
            .flush()
            .with_context(|| format!("flushing {}", self.path.display()))?;

        info!("Data saved to {}", self.path.display());
        Ok(result.rows.len())
    }
}
