use serde::Serialize;

use crate::types::{BenchmarkDataset, ThreadCount};

use super::group::group_by_threads;
use super::stats::{mean, min_max};

/// Mean, best (min) and worst (max) of one group, all shifted by the same offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeSummary {
    pub number_threads: ThreadCount,
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// One summary per distinct thread count, ascending. `offset` is added to every
/// statistic so values stay positive on a log axis.
#[must_use]
pub fn summarize_range(dataset: &BenchmarkDataset, offset: f64) -> Vec<RangeSummary> {
    group_by_threads(dataset)
        .into_iter()
        .filter_map(|(number_threads, values)| {
            let (min, max) = min_max(&values)?;
            let summary = RangeSummary {
                number_threads,
                count: values.len(),
                // mean can drift past min/max by an ulp when all values are equal
                mean: (mean(&values)? + offset).clamp(min + offset, max + offset),
                min: min + offset,
                max: max + offset,
            };
            log::debug!(
                "range: threads={} n={} mean={} min={} max={}",
                summary.number_threads,
                summary.count,
                summary.mean,
                summary.min,
                summary.max
            );
            Some(summary)
        })
        .collect()
}
