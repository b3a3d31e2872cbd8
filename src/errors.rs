use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Pipeline stage an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Config,
    Load,
    Aggregate,
    Render,
    Save,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Config => "config",
            Stage::Load => "load",
            Stage::Aggregate => "aggregate",
            Stage::Render => "render",
            Stage::Save => "save",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("input not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Data format error: {0}")]
    DataFormat(String),

    #[error("Parse error at row {row}, column `{column}`: cannot read {value:?} as {expected}")]
    Parse {
        row: usize,
        column: String,
        value: String,
        expected: &'static str,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl PlotError {
    /// The stage the failing operation ran in.
    #[must_use]
    pub fn stage(&self) -> Stage {
        match self {
            PlotError::NotFound(_)
            | PlotError::Read { .. }
            | PlotError::DataFormat(_)
            | PlotError::Parse { .. } => Stage::Load,
            PlotError::Render(_) => Stage::Render,
            PlotError::Io(_) => Stage::Save,
            PlotError::Config(_) => Stage::Config,
        }
    }

    pub(crate) fn render(err: impl fmt::Display) -> Self {
        PlotError::Render(err.to_string())
    }
}

impl From<toml::de::Error> for PlotError {
    fn from(err: toml::de::Error) -> Self {
        PlotError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;
