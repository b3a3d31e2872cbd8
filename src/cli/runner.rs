use std::io::Write;

use crate::errors::{PlotError, Result};
use crate::naming::Clock;
use crate::summarizer::BenchmarkSummarizer;
use crate::summary::Policy;

use super::command::Command;
use super::util::{fmt_variance, range_table, variance_table};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputMode {
    Human,
    Plain,
    Json,
}

/// Run `cmd` with human-readable output on stdout.
///
/// # Errors
/// The error of the failing pipeline stage.
pub fn run<C: Clock>(summarizer: &BenchmarkSummarizer<C>, cmd: Command) -> Result<()> {
    run_with_format(summarizer, cmd, OutputMode::Human, &mut std::io::stdout().lock())
}

/// Run `cmd`, writing results to `out` in the requested mode.
///
/// # Errors
/// The error of the failing pipeline stage, or `Io` if `out` fails.
pub fn run_with_format<C: Clock, W: Write>(
    summarizer: &BenchmarkSummarizer<C>,
    cmd: Command,
    mode: OutputMode,
    out: &mut W,
) -> Result<()> {
    let policy_or_default = |p: Option<Policy>| p.unwrap_or(summarizer.config().policy);
    match cmd {
        Command::Plot { policy } => {
            let report = summarizer.run(policy_or_default(policy))?;
            match mode {
                OutputMode::Json => writeln!(out, "{}", to_json(&report)?)?,
                OutputMode::Plain => {
                    for p in &report.charts {
                        writeln!(out, "{}", p.display())?;
                    }
                }
                OutputMode::Human => {
                    writeln!(out, "loaded {} records in {} groups", report.records, report.groups)?;
                    for p in &report.charts {
                        writeln!(out, "wrote {}", p.display())?;
                    }
                }
            }
            Ok(())
        }
        Command::Summarize { policy } => {
            let policy = policy_or_default(policy);
            let dataset = summarizer.load()?;
            if policy.includes_variance() {
                let rows = summarizer.summarize_variance(&dataset);
                match mode {
                    OutputMode::Json => writeln!(out, "{}", to_json(&rows)?)?,
                    OutputMode::Plain => {
                        for r in &rows {
                            writeln!(
                                out,
                                "threads={} n={} mean={} variance={}",
                                r.number_threads,
                                r.count,
                                r.mean,
                                fmt_variance(r.variance)
                            )?;
                        }
                    }
                    OutputMode::Human => write!(out, "{}", variance_table(&rows))?,
                }
            }
            if policy.includes_range() {
                let rows = summarizer.summarize_range(&dataset);
                match mode {
                    OutputMode::Json => writeln!(out, "{}", to_json(&rows)?)?,
                    OutputMode::Plain => {
                        for r in &rows {
                            writeln!(
                                out,
                                "threads={} n={} mean={} min={} max={}",
                                r.number_threads, r.count, r.mean, r.min, r.max
                            )?;
                        }
                    }
                    OutputMode::Human => write!(out, "{}", range_table(&rows))?,
                }
            }
            Ok(())
        }
        Command::ShowConfig => {
            let cfg = summarizer.config();
            match mode {
                OutputMode::Json => writeln!(out, "{}", to_json(cfg)?)?,
                OutputMode::Plain | OutputMode::Human => write!(out, "{}", cfg.to_toml()?)?,
            }
            Ok(())
        }
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| PlotError::Io(e.into()))
}
