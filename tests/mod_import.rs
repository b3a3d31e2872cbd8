use csaplot::errors::{PlotError, Stage};
use csaplot::import::{ImportOptions, load_file, load_from_reader};
use std::fs;
use std::io::Cursor;
use tempfile::tempdir;

#[test]
fn test_load_csv_basic() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bench.csv");
    fs::write(&path, "number_threads,performance\n1,2.0\n1,4.0\n2,10.0\n").unwrap();
    let ds = load_file(&path, &ImportOptions::default()).unwrap();
    assert_eq!(ds.len(), 3);
    assert_eq!(ds[0].number_threads, 1);
    assert_eq!(ds[2].performance, 10.0);
}

#[test]
fn test_load_keeps_file_order_and_ignores_extra_columns() {
    let data = "performance,max_iterations,number_threads\n0.5,10000,4\n0.25,40000,1\n";
    let ds = load_from_reader(Cursor::new(data), &ImportOptions::default()).unwrap();
    let threads: Vec<u32> = ds.iter().map(|r| r.number_threads).collect();
    assert_eq!(threads, vec![4, 1]);
}

#[test]
fn test_load_custom_delimiter() {
    let data = "number_threads;performance\n3;1.5e-6\n";
    let ds = load_from_reader(Cursor::new(data), &ImportOptions::with_delimiter(b';')).unwrap();
    assert_eq!(ds[0].performance, 1.5e-6);
}

#[test]
fn test_missing_performance_column_is_data_format() {
    let data = "number_threads,max_iterations\n1,40000\n";
    let err = load_from_reader(Cursor::new(data), &ImportOptions::default()).unwrap_err();
    match &err {
        PlotError::DataFormat(msg) => assert!(msg.contains("performance")),
        other => panic!("expected DataFormat, got {other:?}"),
    }
    assert_eq!(err.stage(), Stage::Load);
}

#[test]
fn test_empty_input_is_data_format() {
    let err = load_from_reader(Cursor::new(""), &ImportOptions::default()).unwrap_err();
    assert!(matches!(err, PlotError::DataFormat(_)));
}

#[test]
fn test_header_only_is_empty_dataset() {
    let ds = load_from_reader(Cursor::new("number_threads,performance\n"), &ImportOptions::default()).unwrap();
    assert!(ds.is_empty());
}

#[test]
fn test_non_numeric_cell_is_parse_error() {
    let data = "number_threads,performance\n1,2.0\nfour,3.0\n";
    let err = load_from_reader(Cursor::new(data), &ImportOptions::default()).unwrap_err();
    match err {
        PlotError::Parse { row, column, value, .. } => {
            assert_eq!(row, 3);
            assert_eq!(column, "number_threads");
            assert_eq!(value, "four");
        }
        other => panic!("expected Parse, got {other:?}"),
    }

    let data = "number_threads,performance\n1,fast\n";
    let err = load_from_reader(Cursor::new(data), &ImportOptions::default()).unwrap_err();
    assert!(matches!(err, PlotError::Parse { ref column, .. } if column == "performance"));
}

#[test]
fn test_ragged_row_is_data_format() {
    let data = "number_threads,performance\n1,2.0\n2\n";
    let err = load_from_reader(Cursor::new(data), &ImportOptions::default()).unwrap_err();
    assert!(matches!(err, PlotError::DataFormat(_)));
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = tempdir().unwrap();
    let err = load_file(dir.path().join("absent.csv"), &ImportOptions::default()).unwrap_err();
    assert!(matches!(err, PlotError::NotFound(_)));
    assert_eq!(err.stage(), Stage::Load);
}

#[test]
fn test_crate_level_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tabs.tsv");
    fs::write(&path, "number_threads\tperformance\n8\t0.125\n").unwrap();
    let ds = csaplot::load(&path, b'\t').unwrap();
    assert_eq!(ds.records(), &[csaplot::BenchmarkRecord::new(8, 0.125)]);
}
