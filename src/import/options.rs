pub const THREADS_COLUMN: &str = "number_threads";
pub const PERFORMANCE_COLUMN: &str = "performance";

#[derive(Debug, Clone)]
pub struct CsvOptions {
    pub delimiter: u8,
    pub trim: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self { delimiter: b',', trim: true }
    }
}

#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub csv: CsvOptions,
    pub threads_column: String,
    pub performance_column: String,
    pub progress_every: Option<usize>,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            csv: CsvOptions::default(),
            threads_column: THREADS_COLUMN.to_string(),
            performance_column: PERFORMANCE_COLUMN.to_string(),
            progress_every: Some(10_000),
        }
    }
}

impl ImportOptions {
    #[must_use]
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { csv: CsvOptions { delimiter, ..CsvOptions::default() }, ..Self::default() }
    }
}
