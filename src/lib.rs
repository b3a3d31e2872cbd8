//! Summarize coupled simulated annealing benchmark results by thread count and
//! render band charts of performance versus threads.
pub mod cli;
pub mod config;
pub mod errors;
pub mod import;
pub mod naming;
pub mod render;
pub mod summarizer;
pub mod summary;
pub mod types;
pub mod utils;

pub use utils::{fsutil, logger};

pub use config::AppConfig;
pub use errors::{PlotError, Result, Stage};
pub use import::{ImportOptions, load_file};
pub use naming::{Clock, FixedClock, SystemClock};
pub use render::{ChartOptions, render_range_chart, render_variance_chart, stage_range_chart, stage_variance_chart};
pub use summarizer::{BenchmarkSummarizer, RunReport};
pub use summary::{Policy, RangeSummary, SingletonVariance, VarianceSummary, summarize_range, summarize_variance};
pub use types::{BenchmarkDataset, BenchmarkRecord};
pub use utils::fsutil::ensure_output_directory;

/// Load a delimited benchmark file with the default column names.
///
/// # Errors
/// See [`import::load_file`].
pub fn load(path: impl AsRef<std::path::Path>, delimiter: u8) -> Result<BenchmarkDataset> {
    load_file(path, &ImportOptions::with_delimiter(delimiter))
}
