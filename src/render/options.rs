use plotters::style::RGBColor;

pub const DEFAULT_TITLE: &str = "Coupled simulated annealing performance";

/// Figure geometry and text. Pixel size is inches x dpi.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
    pub mean_color: RGBColor,
    pub best_color: RGBColor,
    pub worst_color: RGBColor,
    pub band_opacity: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            x_desc: "Threads".to_string(),
            y_desc: "Performance".to_string(),
            width_in: 10.0,
            height_in: 6.0,
            dpi: 300,
            mean_color: RGBColor(31, 119, 180),
            best_color: RGBColor(44, 160, 44),
            worst_color: RGBColor(214, 39, 40),
            band_opacity: 0.2,
        }
    }
}

impl ChartOptions {
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        ((self.width_in * dpi).round() as u32, (self.height_in * dpi).round() as u32)
    }

    /// Font and stroke multiplier relative to a 100 dpi figure.
    #[must_use]
    pub fn scale(&self) -> f64 {
        f64::from(self.dpi) / 100.0
    }
}
