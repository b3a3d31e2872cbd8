use std::path::Path;

use plotters::prelude::*;

use crate::errors::{PlotError, Result};
use crate::types::ThreadCount;

use super::options::ChartOptions;

pub(crate) type Point = (ThreadCount, f64);

pub(crate) struct Line {
    pub label: &'static str,
    pub color: RGBColor,
    pub points: Vec<Point>,
}

/// Shaded region between two series sharing the same x values.
pub(crate) struct Band {
    pub label: &'static str,
    pub color: RGBColor,
    pub lower: Vec<Point>,
    pub upper: Vec<Point>,
}

pub(crate) struct BandChart {
    pub lines: Vec<Line>,
    pub band: Band,
}

impl BandChart {
    fn thread_counts(&self) -> Vec<ThreadCount> {
        self.band.upper.iter().map(|(x, _)| *x).collect()
    }

    fn y_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.lines
            .iter()
            .flat_map(|l| l.points.iter())
            .chain(self.band.lower.iter())
            .chain(self.band.upper.iter())
            .map(|(_, y)| *y)
    }

    /// Log-axis bounds: smallest positive value and the maximum, padded.
    fn y_bounds(&self) -> Result<(f64, f64)> {
        let floor = self.y_values().filter(|y| *y > 0.0).fold(f64::INFINITY, f64::min);
        let ceil = self.y_values().fold(f64::NEG_INFINITY, f64::max);
        if !floor.is_finite() || !ceil.is_finite() {
            return Err(PlotError::Render(
                "no positive values to place on a logarithmic axis; use an offset".to_string(),
            ));
        }
        Ok((floor / 1.25, ceil * 1.25))
    }
}

/// Tick-per-thread labelling is used up to this span; wider spans get numeric ticks.
const MAX_DENSE_SPAN: f64 = 64.0;
const SPARSE_X_LABELS: usize = 10;

fn plot_points(points: &[Point], floor: f64) -> Vec<(f64, f64)> {
    points.iter().map(|&(x, y)| (f64::from(x), y.max(floor))).collect()
}

/// Draw `chart` as a PNG at `path`. The caller owns atomic placement.
pub(crate) fn draw_band_chart(chart: &BandChart, path: &Path, opts: &ChartOptions) -> Result<()> {
    let xs = chart.thread_counts();
    let (Some(&x_min), Some(&x_max)) = (xs.first(), xs.last()) else {
        return Err(PlotError::Render("nothing to plot".to_string()));
    };
    let (width, height) = opts.pixel_size();
    if width == 0 || height == 0 {
        return Err(PlotError::Render(format!("degenerate figure size {width}x{height}")));
    }
    let (y_lo, y_hi) = chart.y_bounds()?;
    let floor = y_lo * 1.25;
    let (x_lo, x_hi) = if x_min == x_max {
        (f64::from(x_min) - 1.0, f64::from(x_max) + 1.0)
    } else {
        (f64::from(x_min), f64::from(x_max))
    };
    let span = x_hi - x_lo;
    let dense = span <= MAX_DENSE_SPAN;
    let scale = opts.scale();

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(PlotError::render)?;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let px = |v: f64| (v * scale).round() as u32;
    let mut ctx = ChartBuilder::on(&root)
        .caption(&opts.title, ("sans-serif", 20.0 * scale))
        .margin(px(12.0))
        .x_label_area_size(px(40.0))
        .y_label_area_size(px(60.0))
        .build_cartesian_2d(x_lo..x_hi, (y_lo..y_hi).log_scale())
        .map_err(PlotError::render)?;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let x_fmt = |x: &f64| {
        let rounded = x.round();
        let on_thread = (x - rounded).abs() < 1e-6 && xs.iter().any(|t| f64::from(*t) == rounded);
        if on_thread || (!dense && rounded >= 0.0) { format!("{}", rounded as u64) } else { String::new() }
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let x_labels = if dense { span as usize + 1 } else { SPARSE_X_LABELS };
    let y_fmt = |y: &f64| format!("{y:.1e}");
    ctx.configure_mesh()
        .x_labels(x_labels)
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt)
        .x_desc(opts.x_desc.as_str())
        .y_desc(opts.y_desc.as_str())
        .label_style(("sans-serif", 12.0 * scale))
        .draw()
        .map_err(PlotError::render)?;

    let band = &chart.band;
    let fill = band.color.mix(opts.band_opacity).filled();
    let mut outline = plot_points(&band.upper, floor);
    outline.extend(plot_points(&band.lower, floor).into_iter().rev());
    ctx.draw_series(std::iter::once(Polygon::new(outline, fill)))
        .map_err(PlotError::render)?
        .label(band.label)
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], fill));

    let stroke = px(2.0).max(1);
    for line in &chart.lines {
        let style = line.color.stroke_width(stroke);
        ctx.draw_series(LineSeries::new(plot_points(&line.points, floor), style))
            .map_err(PlotError::render)?
            .label(line.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    ctx.configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 12.0 * scale))
        .draw()
        .map_err(PlotError::render)?;
    root.present().map_err(PlotError::render)?;
    Ok(())
}
