use clap::{Parser, Subcommand};
use csaplot::cli::{self as prog_cli, OutputMode};
use csaplot::config::{ConfigLayer, load_config_logged};
use csaplot::logger::{LogSettings, parse_level};
use csaplot::naming::{FixedClock, SystemClock};
use csaplot::{AppConfig, BenchmarkSummarizer, Clock, PlotError, Policy, SingletonVariance};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "csaplot", version, about = "Coupled simulated annealing benchmark charts", long_about = None)]
struct Cli {
    /// Path to a config file (TOML)
    #[arg(long, global = true, help = "Path to a config file (TOML). Defaults to ./csaplot.toml when present.")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Benchmark CSV to read (default results/ackley_benchmark.csv)")]
    input: Option<PathBuf>,
    #[arg(long, global = true, help = "Directory charts are written to (default figures)")]
    output_dir: Option<PathBuf>,
    #[arg(long, global = true, help = "Single-character CSV delimiter; `\\t` for tab")]
    delimiter: Option<String>,
    #[arg(long, global = true, allow_negative_numbers = true, help = "Additive shift applied to the range chart")]
    offset: Option<f64>,
    #[arg(long, global = true, help = "Output resolution in dots per inch")]
    dpi: Option<u32>,
    #[arg(long, global = true, help = "Singleton group variance: zero|undefined|exclude")]
    singleton_variance: Option<SingletonVariance>,
    #[arg(long, global = true, help = "Pin the date used in file names (DDMMYYYY)")]
    date: Option<String>,
    #[arg(long, global = true, help = "Log level: error|warn|info|debug|trace")]
    log_level: Option<String>,
    #[arg(long, global = true, conflicts_with = "json", help = "Plain key=value output")]
    plain: bool,
    #[arg(long, global = true, help = "JSON output")]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Load, aggregate and render the chart(s) into the output directory")]
    Plot {
        #[arg(long, help = "variance|range|both; defaults to the configured policy")]
        policy: Option<Policy>,
    },
    #[command(about = "Print per-thread-count statistics without rendering")]
    Summarize {
        #[arg(long, help = "variance|range|both; defaults to the configured policy")]
        policy: Option<Policy>,
    },
    #[command(name = "config", about = "Print the effective configuration")]
    ShowConfig,
}

impl Cli {
    fn layer(&self) -> ConfigLayer {
        ConfigLayer {
            input_path: self.input.clone(),
            output_dir: self.output_dir.clone(),
            delimiter: self.delimiter.clone(),
            offset: self.offset,
            dpi: self.dpi,
            singleton_variance: self.singleton_variance,
            log_level: self.log_level.clone(),
            ..ConfigLayer::default()
        }
    }

    fn mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.plain {
            OutputMode::Plain
        } else {
            OutputMode::Human
        }
    }

    fn command(&self) -> prog_cli::Command {
        match &self.command {
            Commands::Plot { policy } => prog_cli::Command::Plot { policy: *policy },
            Commands::Summarize { policy } => prog_cli::Command::Summarize { policy: *policy },
            Commands::ShowConfig => prog_cli::Command::ShowConfig,
        }
    }
}

fn execute<C: Clock>(cfg: AppConfig, clock: C, cli: &Cli) -> Result<(), PlotError> {
    let summarizer = BenchmarkSummarizer::with_clock(cfg, clock);
    prog_cli::run_with_format(&summarizer, cli.command(), cli.mode(), &mut std::io::stdout().lock())
}

fn try_main(cli: &Cli) -> Result<(), PlotError> {
    let early_level = cli.log_level.clone().or_else(|| std::env::var("CSAPLOT_LOG_LEVEL").ok());
    let early = LogSettings { level: parse_level(early_level.as_deref().unwrap_or("info")), ..LogSettings::default() };
    let cfg = load_config_logged(cli.layer(), cli.config.as_deref(), &early)?;
    log::debug!("config: {cfg:?}");
    match &cli.date {
        Some(stamp) => execute(cfg, FixedClock::from_stamp(stamp)?, cli),
        None => execute(cfg, SystemClock, cli),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = try_main(&cli) {
        log::error!("{} failed: {e}", e.stage());
        eprintln!("error [{}]: {e}", e.stage());
        std::process::exit(1);
    }
}
