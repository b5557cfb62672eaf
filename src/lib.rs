pub mod config;
pub mod dates;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod markup;
pub mod normalize;
pub mod report;
pub mod runner;
pub mod sink;

pub use dates::{generate_snapshot_dates, SnapshotDate};
pub use extract::{extract_html, extract_table, CellValue, ColumnHeader, ExtractionResult, Row};
pub use report::{CollectingReporter, Issue, Reporter, TracingReporter};
pub use runner::{run_with_config, RunSummary, Runner};
