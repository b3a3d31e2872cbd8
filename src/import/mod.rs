mod csv;
mod options;
mod pipeline;

pub use options::{CsvOptions, ImportOptions, PERFORMANCE_COLUMN, THREADS_COLUMN};
pub use pipeline::{load_file, load_from_reader};
