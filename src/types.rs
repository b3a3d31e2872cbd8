use serde::{Deserialize, Serialize};
use std::ops::Deref;

pub type ThreadCount = u32;

/// One measured trial of an optimizer run at a given thread count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    pub number_threads: ThreadCount,
    pub performance: f64,
}

impl BenchmarkRecord {
    #[must_use]
    pub fn new(number_threads: ThreadCount, performance: f64) -> Self {
        Self { number_threads, performance }
    }
}

impl From<(ThreadCount, f64)> for BenchmarkRecord {
    fn from((number_threads, performance): (ThreadCount, f64)) -> Self {
        Self::new(number_threads, performance)
    }
}

/// Records in file order. Thread counts repeat, one row per trial.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkDataset {
    records: Vec<BenchmarkRecord>,
}

impl BenchmarkDataset {
    #[must_use]
    pub fn new(records: Vec<BenchmarkRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }
}

impl Deref for BenchmarkDataset {
    type Target = [BenchmarkRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl<R: Into<BenchmarkRecord>> FromIterator<R> for BenchmarkDataset {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
