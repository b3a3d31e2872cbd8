//! Group-by-thread-count aggregation.
mod group;
mod options;
mod range;
pub mod stats;
mod variance;

pub use group::group_by_threads;
pub use options::{Policy, SingletonVariance};
pub use range::{RangeSummary, summarize_range};
pub use variance::{VarianceSummary, summarize_variance};
