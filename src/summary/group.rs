use std::collections::BTreeMap;

use crate::types::{BenchmarkRecord, ThreadCount};

/// Performance values keyed by thread count, ascending.
pub fn group_by_threads(records: &[BenchmarkRecord]) -> BTreeMap<ThreadCount, Vec<f64>> {
    let mut groups: BTreeMap<ThreadCount, Vec<f64>> = BTreeMap::new();
    for rec in records {
        groups.entry(rec.number_threads).or_default().push(rec.performance);
    }
    groups
}
