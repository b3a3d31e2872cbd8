use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::errors::{PlotError, Result};
use crate::types::BenchmarkDataset;

use super::csv::read_csv;
use super::options::ImportOptions;

/// Load a benchmark dataset from a delimited file.
///
/// # Errors
/// `NotFound` if `path` does not exist, `Read` on other open/read failures,
/// `DataFormat` when the required columns are absent and `Parse` for
/// non-numeric cells.
pub fn load_file<P: AsRef<Path>>(path: P, opts: &ImportOptions) -> Result<BenchmarkDataset> {
    let path = path.as_ref();
    log::info!("load: path={}, delimiter={:?}", path.display(), char::from(opts.csv.delimiter));
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => PlotError::NotFound(path.to_path_buf()),
        _ => PlotError::Read { path: path.to_path_buf(), source: e },
    })?;
    let dataset = load_from_reader(BufReader::new(file), opts).map_err(|e| match e {
        PlotError::Io(source) => PlotError::Read { path: path.to_path_buf(), source },
        other => other,
    })?;
    log::info!("load: {} records from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Load a benchmark dataset from an arbitrary reader.
///
/// # Errors
/// Same as [`load_file`], minus `NotFound`.
pub fn load_from_reader<R: Read>(reader: R, opts: &ImportOptions) -> Result<BenchmarkDataset> {
    read_csv(reader, opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn extra_columns_are_ignored() {
        let data = "number_threads,max_iterations,performance\n1,40000,0.5\n2,20000,0.25\n";
        let ds = load_from_reader(Cursor::new(data), &ImportOptions::default()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds[1].number_threads, 2);
        assert_eq!(ds[1].performance, 0.25);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_file("definitely/not/here.csv", &ImportOptions::default()).unwrap_err();
        assert!(matches!(err, PlotError::NotFound(_)));
    }
}
