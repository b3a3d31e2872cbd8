//! Layered configuration: CLI > environment > config file > defaults.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::errors::{PlotError, Result};
use crate::import::ImportOptions;
use crate::render::{ChartOptions, DEFAULT_TITLE};
use crate::summary::{Policy, SingletonVariance};
use crate::utils::logger::{LogSettings, configure_logging, parse_level};

pub const DEFAULT_INPUT: &str = "results/ackley_benchmark.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "figures";
pub const DEFAULT_RANGE_LABEL: &str = "40.000 total";
pub const CONFIG_FILE_NAME: &str = "csaplot.toml";

/// One source of settings; unset fields fall through to the next layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    pub input_path: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub delimiter: Option<String>,
    pub offset: Option<f64>,
    pub dpi: Option<u32>,
    pub figure_width_in: Option<f64>,
    pub figure_height_in: Option<f64>,
    pub title: Option<String>,
    pub range_label: Option<String>,
    pub policy: Option<Policy>,
    pub singleton_variance: Option<SingletonVariance>,
    pub log_level: Option<String>,
    pub log_dir: Option<PathBuf>,
    pub log_retention: Option<u32>,
}

macro_rules! fill {
    ($dst:ident, $src:ident, $($field:ident),+ $(,)?) => {
        $( if $dst.$field.is_none() { $dst.$field = $src.$field; } )+
    };
}

impl ConfigLayer {
    /// Fill every unset field from `lower`.
    pub fn merge_missing(&mut self, lower: ConfigLayer) {
        let upper = self;
        fill!(
            upper,
            lower,
            input_path,
            output_dir,
            delimiter,
            offset,
            dpi,
            figure_width_in,
            figure_height_in,
            title,
            range_label,
            policy,
            singleton_variance,
            log_level,
            log_dir,
            log_retention,
        );
    }

    /// # Errors
    /// `Config` on malformed TOML or unknown keys.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// # Errors
    /// `Config` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| PlotError::Config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&s).map_err(|e| PlotError::Config(format!("{}: {e}", path.display())))
    }

    /// Settings from `CSAPLOT_*` environment variables.
    ///
    /// # Errors
    /// `Config` when a numeric or enum variable does not parse.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigLayer::from_env`] over an arbitrary lookup.
    ///
    /// # Errors
    /// `Config` when a numeric or enum value does not parse.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        fn parsed<T: FromStr>(key: &str, raw: Option<String>) -> Result<Option<T>>
        where
            T::Err: std::fmt::Display,
        {
            raw.map(|v| v.parse::<T>().map_err(|e| PlotError::Config(format!("{key}={v}: {e}"))))
                .transpose()
        }
        Ok(Self {
            input_path: lookup("CSAPLOT_INPUT").map(PathBuf::from),
            output_dir: lookup("CSAPLOT_OUTPUT_DIR").map(PathBuf::from),
            delimiter: lookup("CSAPLOT_DELIMITER"),
            offset: parsed("CSAPLOT_OFFSET", lookup("CSAPLOT_OFFSET"))?,
            dpi: parsed("CSAPLOT_DPI", lookup("CSAPLOT_DPI"))?,
            policy: parsed("CSAPLOT_POLICY", lookup("CSAPLOT_POLICY"))?,
            singleton_variance: parsed("CSAPLOT_SINGLETON_VARIANCE", lookup("CSAPLOT_SINGLETON_VARIANCE"))?,
            log_level: lookup("CSAPLOT_LOG_LEVEL"),
            log_dir: lookup("CSAPLOT_LOG_DIR").map(PathBuf::from),
            log_retention: parsed("CSAPLOT_LOG_RETENTION", lookup("CSAPLOT_LOG_RETENTION"))?,
            ..Self::default()
        })
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    #[serde(serialize_with = "serialize_delimiter")]
    pub delimiter: u8,
    pub offset: f64,
    pub dpi: u32,
    pub figure_width_in: f64,
    pub figure_height_in: f64,
    pub title: String,
    pub range_label: String,
    pub policy: Policy,
    pub singleton_variance: SingletonVariance,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
    pub log_retention: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            delimiter: b',',
            offset: 0.0,
            dpi: 300,
            figure_width_in: 10.0,
            figure_height_in: 6.0,
            title: DEFAULT_TITLE.to_string(),
            range_label: DEFAULT_RANGE_LABEL.to_string(),
            policy: Policy::default(),
            singleton_variance: SingletonVariance::default(),
            log_level: "info".to_string(),
            log_dir: None,
            log_retention: 7,
        }
    }
}

fn serialize_delimiter<S: serde::Serializer>(d: &u8, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_char(char::from(*d))
}

fn parse_delimiter(raw: &str) -> Result<u8> {
    let unescaped = match raw {
        "\\t" | "tab" => "\t",
        other => other,
    };
    match unescaped.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(PlotError::Config(format!("delimiter must be a single ASCII character, got {raw:?}"))),
    }
}

impl AppConfig {
    /// Apply `layer` over the defaults and validate the result.
    ///
    /// # Errors
    /// `Config` when a value is out of range.
    pub fn resolve(layer: ConfigLayer) -> Result<Self> {
        let d = Self::default();
        let cfg = Self {
            input_path: layer.input_path.unwrap_or(d.input_path),
            output_dir: layer.output_dir.unwrap_or(d.output_dir),
            delimiter: layer.delimiter.as_deref().map(parse_delimiter).transpose()?.unwrap_or(d.delimiter),
            offset: layer.offset.unwrap_or(d.offset),
            dpi: layer.dpi.unwrap_or(d.dpi),
            figure_width_in: layer.figure_width_in.unwrap_or(d.figure_width_in),
            figure_height_in: layer.figure_height_in.unwrap_or(d.figure_height_in),
            title: layer.title.unwrap_or(d.title),
            range_label: layer.range_label.unwrap_or(d.range_label),
            policy: layer.policy.unwrap_or(d.policy),
            singleton_variance: layer.singleton_variance.unwrap_or(d.singleton_variance),
            log_level: layer.log_level.unwrap_or(d.log_level),
            log_dir: layer.log_dir,
            log_retention: layer.log_retention.unwrap_or(d.log_retention),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// # Errors
    /// `Config` naming the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        if self.dpi == 0 {
            return Err(PlotError::Config("dpi must be positive".to_string()));
        }
        if !(self.figure_width_in > 0.0 && self.figure_height_in > 0.0) {
            return Err(PlotError::Config("figure size must be positive".to_string()));
        }
        if !self.offset.is_finite() {
            return Err(PlotError::Config("offset must be finite".to_string()));
        }
        if !self.delimiter.is_ascii() || self.delimiter == b'"' || self.delimiter == b'\n' {
            return Err(PlotError::Config(format!("unusable delimiter {:?}", char::from(self.delimiter))));
        }
        Ok(())
    }

    #[must_use]
    pub fn import_options(&self) -> ImportOptions {
        ImportOptions::with_delimiter(self.delimiter)
    }

    #[must_use]
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            title: self.title.clone(),
            width_in: self.figure_width_in,
            height_in: self.figure_height_in,
            dpi: self.dpi,
            ..ChartOptions::default()
        }
    }

    #[must_use]
    pub fn log_settings(&self) -> LogSettings {
        LogSettings {
            level: parse_level(&self.log_level),
            dir: self.log_dir.clone(),
            retention: self.log_retention,
            ..LogSettings::default()
        }
    }

    /// Effective configuration rendered as TOML.
    ///
    /// # Errors
    /// `Config` if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        let layer = ConfigLayer {
            input_path: Some(self.input_path.clone()),
            output_dir: Some(self.output_dir.clone()),
            delimiter: Some(char::from(self.delimiter).to_string()),
            offset: Some(self.offset),
            dpi: Some(self.dpi),
            figure_width_in: Some(self.figure_width_in),
            figure_height_in: Some(self.figure_height_in),
            title: Some(self.title.clone()),
            range_label: Some(self.range_label.clone()),
            policy: Some(self.policy),
            singleton_variance: Some(self.singleton_variance),
            log_level: Some(self.log_level.clone()),
            log_dir: self.log_dir.clone(),
            log_retention: Some(self.log_retention),
        };
        toml::to_string_pretty(&layer).map_err(|e| PlotError::Config(e.to_string()))
    }
}

/// Candidate config files, most specific first. The flag is `explicit` for
/// paths the user named, which must exist.
#[must_use]
pub fn find_config_paths(cli_config: Option<&Path>) -> Vec<(PathBuf, bool)> {
    let mut paths = Vec::new();
    if let Some(p) = cli_config {
        paths.push((p.to_path_buf(), true));
    }
    if let Ok(p) = std::env::var("CSAPLOT_CONFIG") {
        paths.push((PathBuf::from(p), true));
    }
    if let Ok(cur) = std::env::current_dir() {
        paths.push((cur.join(CONFIG_FILE_NAME), false));
    }
    paths
}

/// Resolve the run configuration from the CLI layer, environment and config files.
///
/// # Errors
/// `Config` when a named config file is missing or malformed, or a value is invalid.
pub fn load_config(cli: ConfigLayer, cli_config: Option<&Path>) -> Result<AppConfig> {
    let mut layer = cli;
    layer.merge_missing(ConfigLayer::from_env()?);
    for (path, explicit) in find_config_paths(cli_config) {
        if !path.exists() {
            if explicit {
                return Err(PlotError::Config(format!("config file {} not found", path.display())));
            }
            continue;
        }
        log::debug!("config: reading {}", path.display());
        layer.merge_missing(ConfigLayer::from_file(&path)?);
    }
    AppConfig::resolve(layer)
}

/// Install `early` logging, resolve the configuration, then apply its log settings.
///
/// # Errors
/// Same as [`load_config`], plus logger setup failures.
pub fn load_config_logged(cli: ConfigLayer, cli_config: Option<&Path>, early: &LogSettings) -> Result<AppConfig> {
    configure_logging(early)?;
    let cfg = load_config(cli, cli_config)?;
    configure_logging(&cfg.log_settings())?;
    Ok(cfg)
}
