use csaplot::errors::{PlotError, Stage};
use csaplot::fsutil::stray_temp_files;
use csaplot::render::{ChartOptions, render_range_chart, render_variance_chart};
use csaplot::summary::{RangeSummary, SingletonVariance, VarianceSummary, summarize_range, summarize_variance};
use csaplot::types::BenchmarkDataset;
use std::fs;
use tempfile::tempdir;

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn small() -> ChartOptions {
    ChartOptions { dpi: 40, ..ChartOptions::default() }
}

fn dataset() -> BenchmarkDataset {
    [(1u32, 0.8), (1, 1.2), (2, 0.3), (2, 0.5), (3, 0.01), (3, 0.02), (4, 0.001)]
        .into_iter()
        .collect()
}

fn assert_png(path: &std::path::Path) {
    let bytes = fs::read(path).unwrap();
    assert!(bytes.len() > PNG_MAGIC.len());
    assert_eq!(&bytes[..8], &PNG_MAGIC);
}

#[test]
fn test_variance_chart_writes_png() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("variance.png");
    let summaries = summarize_variance(&dataset(), SingletonVariance::Zero);
    render_variance_chart(&summaries, &out, &small()).unwrap();
    assert_png(&out);
    assert!(stray_temp_files(dir.path()).is_empty());
}

#[test]
fn test_variance_chart_with_undefined_band() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("undefined.png");
    let summaries = summarize_variance(&dataset(), SingletonVariance::Undefined);
    assert_eq!(summaries.last().unwrap().variance, None);
    render_variance_chart(&summaries, &out, &small()).unwrap();
    assert_png(&out);
}

#[test]
fn test_range_chart_writes_png() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("range.png");
    let summaries = summarize_range(&dataset(), 1.0);
    render_range_chart(&summaries, &out, &small()).unwrap();
    assert_png(&out);
}

#[test]
fn test_single_thread_count_still_renders() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("single.png");
    let summaries = vec![VarianceSummary { number_threads: 1, count: 2, mean: 3.0, variance: Some(2.0) }];
    render_variance_chart(&summaries, &out, &small()).unwrap();
    assert_png(&out);
}

#[test]
fn test_empty_summaries_fail_without_writing() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("empty.png");
    let err = render_variance_chart(&[], &out, &small()).unwrap_err();
    assert!(matches!(err, PlotError::Render(_)));
    assert_eq!(err.stage(), Stage::Render);
    assert!(!out.exists());

    let err = render_range_chart(&[], &out, &small()).unwrap_err();
    assert!(matches!(err, PlotError::Render(_)));
    assert!(!out.exists());
    assert!(stray_temp_files(dir.path()).is_empty());
}

#[test]
fn test_non_positive_values_fail_and_keep_previous_chart() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("kept.png");
    fs::write(&out, b"previous").unwrap();
    let summaries = vec![RangeSummary { number_threads: 1, count: 1, mean: -1.0, min: -1.0, max: -1.0 }];
    let err = render_range_chart(&summaries, &out, &small()).unwrap_err();
    assert!(matches!(err, PlotError::Render(_)));
    assert_eq!(fs::read(&out).unwrap(), b"previous");
    assert!(stray_temp_files(dir.path()).is_empty());
}

#[test]
fn test_pixel_size_follows_dpi() {
    let opts = ChartOptions { width_in: 10.0, height_in: 6.0, dpi: 300, ..ChartOptions::default() };
    assert_eq!(opts.pixel_size(), (3000, 1800));
    assert_eq!(small().pixel_size(), (400, 240));
}

#[test]
fn test_title_text_is_drawn() {
    let dir = tempdir().unwrap();
    let summaries = summarize_variance(&dataset(), SingletonVariance::Zero);
    let a = dir.path().join("a.png");
    let b = dir.path().join("b.png");
    render_variance_chart(&summaries, &a, &ChartOptions { title: "Run A".into(), ..small() }).unwrap();
    render_variance_chart(&summaries, &b, &ChartOptions { title: "Completely different".into(), ..small() }).unwrap();
    assert_ne!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
}

#[test]
fn test_largest_thread_count_renders() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("max.png");
    let summaries = vec![VarianceSummary { number_threads: u32::MAX, count: 2, mean: 1.0, variance: Some(0.25) }];
    render_variance_chart(&summaries, &out, &small()).unwrap();
    assert_png(&out);
}

#[test]
fn test_sparse_thread_counts_render_quickly() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("sparse.png");
    let ds: BenchmarkDataset = [(1u32, 0.5), (1, 0.7), (200_000_000, 0.1), (200_000_000, 0.2)].into_iter().collect();
    let started = std::time::Instant::now();
    render_range_chart(&summarize_range(&ds, 0.0), &out, &small()).unwrap();
    assert!(started.elapsed() < std::time::Duration::from_secs(30));
    assert_png(&out);
}
