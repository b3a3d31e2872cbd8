use csaplot::summary::{SingletonVariance, summarize_range, summarize_variance};
use csaplot::types::BenchmarkDataset;

fn dataset(rows: &[(u32, f64)]) -> BenchmarkDataset {
    rows.iter().copied().collect()
}

#[test]
fn test_variance_summary_matches_scenario() {
    let s = summarize_variance(&dataset(&[(1, 2.0), (1, 4.0), (2, 10.0)]), SingletonVariance::Zero);
    assert_eq!(s.len(), 2);
    assert_eq!(s[0].number_threads, 1);
    assert!((s[0].mean - 3.0).abs() < 1e-12);
    assert!((s[0].variance.unwrap() - 2.0).abs() < 1e-12);
    assert_eq!(s[1].number_threads, 2);
    assert_eq!(s[1].mean, 10.0);
    assert_eq!(s[1].variance, Some(0.0));
}

#[test]
fn test_range_summary_matches_scenario() {
    let s = summarize_range(&dataset(&[(1, 2.0), (1, 4.0), (2, 9.0)]), 1.0);
    assert_eq!(s.len(), 2);
    assert_eq!((s[0].mean, s[0].min, s[0].max), (4.0, 3.0, 5.0));
    assert_eq!((s[1].mean, s[1].min, s[1].max), (10.0, 10.0, 10.0));
}

#[test]
fn test_groups_are_ascending_regardless_of_input_order() {
    let ds = dataset(&[(8, 1.0), (2, 1.0), (16, 1.0), (1, 1.0), (2, 3.0)]);
    let keys: Vec<u32> = summarize_variance(&ds, SingletonVariance::Zero).iter().map(|s| s.number_threads).collect();
    assert_eq!(keys, vec![1, 2, 8, 16]);
    let keys: Vec<u32> = summarize_range(&ds, 0.0).iter().map(|s| s.number_threads).collect();
    assert_eq!(keys, vec![1, 2, 8, 16]);
}

#[test]
fn test_counts_cover_every_record() {
    let ds = dataset(&[(1, 0.1), (1, 0.2), (1, 0.3), (3, 0.4), (3, 0.5)]);
    let s = summarize_variance(&ds, SingletonVariance::Zero);
    assert_eq!(s.iter().map(|g| g.count).sum::<usize>(), ds.len());
}

#[test]
fn test_undefined_singleton_variance() {
    let s = summarize_variance(&dataset(&[(1, 2.0), (1, 4.0), (2, 10.0)]), SingletonVariance::Undefined);
    assert_eq!(s[1].variance, None);
    assert_eq!(s[1].mean, 10.0);
}

#[test]
fn test_empty_dataset_has_no_groups() {
    let ds = BenchmarkDataset::default();
    assert!(summarize_variance(&ds, SingletonVariance::Zero).is_empty());
    assert!(summarize_range(&ds, 1.0).is_empty());
}
