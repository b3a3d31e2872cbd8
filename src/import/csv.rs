use std::io::Read;

use crate::errors::{PlotError, Result};
use crate::types::{BenchmarkDataset, BenchmarkRecord, ThreadCount};

use super::options::ImportOptions;

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Copy)]
struct Columns {
    threads: usize,
    performance: usize,
}

fn resolve_columns(headers: &csv::StringRecord, opts: &ImportOptions) -> Result<Columns> {
    let find = |name: &str| headers.iter().position(|h| h == name);
    let missing: Vec<&str> = [opts.threads_column.as_str(), opts.performance_column.as_str()]
        .into_iter()
        .filter(|name| find(name).is_none())
        .collect();
    match (find(&opts.threads_column), find(&opts.performance_column)) {
        (Some(threads), Some(performance)) => Ok(Columns { threads, performance }),
        _ => Err(PlotError::DataFormat(format!(
            "missing required column(s) {}; header is [{}]",
            missing.join(", "),
            headers.iter().collect::<Vec<_>>().join(", ")
        ))),
    }
}

pub(crate) fn parse_threads(cell: &str, row: usize, column: &str) -> Result<ThreadCount> {
    match cell.parse::<ThreadCount>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(PlotError::Parse {
            row,
            column: column.to_string(),
            value: cell.to_string(),
            expected: "integer >= 1",
        }),
    }
}

pub(crate) fn parse_performance(cell: &str, row: usize, column: &str) -> Result<f64> {
    match cell.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(PlotError::Parse {
            row,
            column: column.to_string(),
            value: cell.to_string(),
            expected: "finite float",
        }),
    }
}

fn csv_error(err: csv::Error) -> PlotError {
    match err.into_kind() {
        csv::ErrorKind::Io(e) => PlotError::Io(e),
        csv::ErrorKind::UnequalLengths { pos, expected_len, len } => PlotError::DataFormat(format!(
            "row {} has {len} fields, header has {expected_len}",
            pos.map_or(0, |p| p.line())
        )),
        csv::ErrorKind::Utf8 { pos, err } => PlotError::DataFormat(format!(
            "invalid UTF-8 at line {}: {err}",
            pos.map_or(0, |p| p.line())
        )),
        other => PlotError::DataFormat(format!("{other:?}")),
    }
}

/// Parse every row or fail; never yields a partial dataset.
pub fn read_csv<R: Read>(reader: R, opts: &ImportOptions) -> Result<BenchmarkDataset> {
    let trim = if opts.csv.trim { csv::Trim::All } else { csv::Trim::None };
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(opts.csv.delimiter)
        .trim(trim)
        .from_reader(reader);
    let headers = rdr.headers().map_err(csv_error)?.clone();
    let columns = resolve_columns(&headers, opts)?;

    let mut records = Vec::new();
    for (idx, rec) in rdr.records().enumerate() {
        let rec = rec.map_err(csv_error)?;
        // data rows start on line 2
        let row = idx + 2;
        let threads = rec.get(columns.threads).unwrap_or_default();
        let performance = rec.get(columns.performance).unwrap_or_default();
        records.push(BenchmarkRecord {
            number_threads: parse_threads(threads, row, &opts.threads_column)?,
            performance: parse_performance(performance, row, &opts.performance_column)?,
        });
        if let Some(n) = opts.progress_every
            && records.len() % n == 0
        {
            log::debug!("loaded {} records", records.len());
        }
    }
    Ok(BenchmarkDataset::new(records))
}
