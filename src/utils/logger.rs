//! Process logging over `log4rs`: stderr console plus an optional rolling file.
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use log::LevelFilter;
use log4rs::Handle;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::append::rolling_file::policy::compound::{
    CompoundPolicy, roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger,
};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::errors::{PlotError, Result};

const FILE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} [{l}] {t} - {m}{n}";
const CONSOLE_PATTERN: &str = "[{l}] {m}{n}";
const ROLL_SIZE: u64 = 10 * 1024 * 1024;

static HANDLE: OnceLock<Handle> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct LogSettings {
    pub level: LevelFilter,
    /// When set, logs are also written to `{dir}/csaplot.log`.
    pub dir: Option<PathBuf>,
    pub retention: u32,
    pub console: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self { level: LevelFilter::Info, dir: None, retention: 7, console: true }
    }
}

/// error|warn|info|debug|trace|off; anything else is info.
#[must_use]
pub fn parse_level(level: &str) -> LevelFilter {
    match level.to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

fn rolling_appender(dir: &Path, keep: u32) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(dir)?;
    let roller = FixedWindowRoller::builder()
        .build(&format!("{}", dir.join("csaplot.{}.log").display()), keep)
        .map_err(|e| PlotError::Config(format!("log roller: {e}")))?;
    let policy = CompoundPolicy::new(Box::new(SizeTrigger::new(ROLL_SIZE)), Box::new(roller));
    let appender = RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
        .build(dir.join("csaplot.log"), Box::new(policy))?;
    Ok(appender)
}

fn build_config(settings: &LogSettings) -> Result<Config> {
    let mut builder = Config::builder();
    let mut root = Root::builder();
    if settings.console {
        let console = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("console", Box::new(console)));
        root = root.appender("console");
    }
    if let Some(dir) = &settings.dir {
        let file = rolling_appender(dir, settings.retention.max(1))?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }
    builder
        .build(root.build(settings.level))
        .map_err(|e| PlotError::Config(format!("logger: {e}")))
}

/// Install the logger, or replace its configuration if already installed.
///
/// # Errors
/// `Io` if the log directory cannot be created, `Config` if log4rs rejects the setup
/// or another logger already owns the process.
pub fn configure_logging(settings: &LogSettings) -> Result<()> {
    let config = build_config(settings)?;
    if let Some(handle) = HANDLE.get() {
        handle.set_config(config);
        return Ok(());
    }
    let handle = log4rs::init_config(config).map_err(|e| PlotError::Config(format!("logger: {e}")))?;
    let _ = HANDLE.set(handle);
    Ok(())
}
