use serde::Serialize;

use crate::types::{BenchmarkDataset, ThreadCount};

use super::group::group_by_threads;
use super::options::SingletonVariance;
use super::stats::{mean, sample_variance};

/// Mean and sample variance of one thread-count group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VarianceSummary {
    pub number_threads: ThreadCount,
    pub count: usize,
    pub mean: f64,
    pub variance: Option<f64>,
}

impl VarianceSummary {
    /// Standard deviation, the half-width of the chart band.
    #[must_use]
    pub fn std_dev(&self) -> Option<f64> {
        self.variance.map(f64::sqrt)
    }
}

/// One summary per distinct thread count, ascending.
#[must_use]
pub fn summarize_variance(dataset: &BenchmarkDataset, singleton: SingletonVariance) -> Vec<VarianceSummary> {
    let summaries: Vec<VarianceSummary> = group_by_threads(dataset)
        .into_iter()
        .filter(|(_, values)| values.len() > 1 || singleton != SingletonVariance::Exclude)
        .filter_map(|(number_threads, values)| {
            let variance = match (sample_variance(&values), singleton) {
                (Some(v), _) => Some(v),
                (None, SingletonVariance::Zero) => Some(0.0),
                (None, _) => None,
            };
            Some(VarianceSummary { number_threads, count: values.len(), mean: mean(&values)?, variance })
        })
        .collect();
    for s in &summaries {
        log::debug!(
            "variance: threads={} n={} mean={} variance={:?}",
            s.number_threads,
            s.count,
            s.mean,
            s.variance
        );
    }
    summaries
}
