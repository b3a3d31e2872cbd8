//! Descriptive statistics over a single group of samples.

/// Arithmetic mean; `None` for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    Some(values.iter().sum::<f64>() / n)
}

/// Sample variance with an (n - 1) denominator; `None` below two samples.
#[must_use]
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    #[allow(clippy::cast_precision_loss)]
    let dof = (values.len() - 1) as f64;
    Some(values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / dof)
}

#[must_use]
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(values.iter().fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[2.0, 4.0]), Some(3.0));
    }

    #[test]
    fn variance_uses_sample_denominator() {
        assert_eq!(sample_variance(&[2.0, 4.0]), Some(2.0));
        assert_eq!(sample_variance(&[1.0, 2.0, 3.0, 4.0]), Some(5.0 / 3.0));
        assert_eq!(sample_variance(&[7.0]), None);
    }

    #[test]
    fn min_max_tracks_extremes() {
        assert_eq!(min_max(&[3.0, -1.0, 8.5, 2.0]), Some((-1.0, 8.5)));
        assert_eq!(min_max(&[]), None);
    }
}
