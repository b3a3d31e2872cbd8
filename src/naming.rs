//! Date-stamped chart file names with an injectable clock.
use chrono::{Local, NaiveDate};

use crate::errors::{PlotError, Result};

pub const CHART_STEM: &str = "Coupled simulated annealing - performance comparison";
pub const DATE_FORMAT: &str = "%d%m%Y";

/// Source of "today" for output naming.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// Parse a `DDMMYYYY` stamp.
    ///
    /// # Errors
    /// Returns `Config` when the stamp is not a valid date.
    pub fn from_stamp(stamp: &str) -> Result<Self> {
        NaiveDate::parse_from_str(stamp, DATE_FORMAT)
            .map(FixedClock)
            .map_err(|e| PlotError::Config(format!("invalid date `{stamp}` (expected DDMMYYYY): {e}")))
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// `<DDMMYYYY> - Coupled simulated annealing - performance comparison.png`
#[must_use]
pub fn variance_chart_name(date: NaiveDate) -> String {
    format!("{} - {CHART_STEM}.png", date.format(DATE_FORMAT))
}

/// `<DDMMYYYY> - Coupled simulated annealing - performance comparison - <label>.png`
#[must_use]
pub fn range_chart_name(date: NaiveDate, label: &str) -> String {
    let label = label.trim();
    if label.is_empty() {
        return variance_chart_name(date).replace(".png", " - range.png");
    }
    format!("{} - {CHART_STEM} - {label}.png", date.format(DATE_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    #[test]
    fn names_embed_day_month_year() {
        assert_eq!(
            variance_chart_name(date()),
            "07032024 - Coupled simulated annealing - performance comparison.png"
        );
        assert_eq!(
            range_chart_name(date(), "40.000 total"),
            "07032024 - Coupled simulated annealing - performance comparison - 40.000 total.png"
        );
    }

    #[test]
    fn empty_label_does_not_collide_with_variance_name() {
        assert_ne!(range_chart_name(date(), " "), variance_chart_name(date()));
    }

    #[test]
    fn fixed_clock_parses_stamp() {
        assert_eq!(FixedClock::from_stamp("07032024").unwrap().today(), date());
        assert!(FixedClock::from_stamp("32132024").is_err());
    }
}
