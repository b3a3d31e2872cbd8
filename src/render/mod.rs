//! Band charts over per-thread-count summaries, written as PNG.
mod chart;
mod options;

pub use options::{ChartOptions, DEFAULT_TITLE};

use std::path::Path;

use crate::errors::{PlotError, Result};
use crate::summary::{RangeSummary, VarianceSummary};
use crate::utils::fsutil::{StagedFile, stage_file};

use chart::{Band, BandChart, Line, draw_band_chart};

/// Mean line with a ±standard deviation band on a log y axis.
///
/// # Errors
/// `Render` when `summaries` is empty or drawing fails; nothing is written then.
/// `Io` when the finished image cannot be moved into place.
pub fn render_variance_chart(
    summaries: &[VarianceSummary],
    output_path: impl AsRef<Path>,
    opts: &ChartOptions,
) -> Result<()> {
    stage_variance_chart(summaries, output_path, opts)?.commit().map(|_| ())
}

/// Draw the variance chart into a temp file next to `output_path` without replacing it.
///
/// # Errors
/// `Render` when `summaries` is empty or drawing fails.
pub fn stage_variance_chart(
    summaries: &[VarianceSummary],
    output_path: impl AsRef<Path>,
    opts: &ChartOptions,
) -> Result<StagedFile> {
    if summaries.is_empty() {
        return Err(PlotError::Render("no variance summaries to plot".to_string()));
    }
    let half_width = |s: &VarianceSummary| s.std_dev().unwrap_or(0.0);
    let chart = BandChart {
        lines: vec![Line {
            label: "Mean",
            color: opts.mean_color,
            points: summaries.iter().map(|s| (s.number_threads, s.mean)).collect(),
        }],
        band: Band {
            label: "Variance",
            color: opts.mean_color,
            lower: summaries.iter().map(|s| (s.number_threads, s.mean - half_width(s))).collect(),
            upper: summaries.iter().map(|s| (s.number_threads, s.mean + half_width(s))).collect(),
        },
    };
    render(&chart, output_path.as_ref(), opts)
}

/// Mean, best and worst lines with the best..worst range shaded.
///
/// # Errors
/// Same as [`render_variance_chart`].
pub fn render_range_chart(
    summaries: &[RangeSummary],
    output_path: impl AsRef<Path>,
    opts: &ChartOptions,
) -> Result<()> {
    stage_range_chart(summaries, output_path, opts)?.commit().map(|_| ())
}

/// Range counterpart of [`stage_variance_chart`].
///
/// # Errors
/// `Render` when `summaries` is empty or drawing fails.
pub fn stage_range_chart(
    summaries: &[RangeSummary],
    output_path: impl AsRef<Path>,
    opts: &ChartOptions,
) -> Result<StagedFile> {
    if summaries.is_empty() {
        return Err(PlotError::Render("no range summaries to plot".to_string()));
    }
    let series = |f: fn(&RangeSummary) -> f64| summaries.iter().map(|s| (s.number_threads, f(s))).collect::<Vec<_>>();
    let chart = BandChart {
        lines: vec![
            Line { label: "Mean", color: opts.mean_color, points: series(|s| s.mean) },
            Line { label: "Best", color: opts.best_color, points: series(|s| s.min) },
            Line { label: "Worst", color: opts.worst_color, points: series(|s| s.max) },
        ],
        band: Band { label: "Range", color: opts.mean_color, lower: series(|s| s.min), upper: series(|s| s.max) },
    };
    render(&chart, output_path.as_ref(), opts)
}

fn render(chart: &BandChart, dest: &Path, opts: &ChartOptions) -> Result<StagedFile> {
    log::info!("render: {}", dest.display());
    stage_file(dest, |tmp| draw_band_chart(chart, tmp, opts))
}
