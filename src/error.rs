// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// A cell whose text could not be turned into a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("could not convert '{0}' to a number")]
    Currency(String),
    #[error("'{0}' doesn't look like a percentage")]
    Percentage(String),
}

/// The page did not have the shape we scrape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("market value table not found; check if the page structure has changed")]
    TableNotFound,
    #[error("header row not found; check if the page structure has changed")]
    HeaderRowNotFound,
}

/// Why a single snapshot was skipped. Never fatal to a run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("retrieving {url}: {detail}")]
    Transport { url: String, detail: String },
    #[error(transparent)]
    Structure(#[from] StructureError),
    #[error("writing {}: {detail}", .path.display())]
    Sink { path: PathBuf, detail: String },
}
