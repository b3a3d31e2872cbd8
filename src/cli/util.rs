use crate::summary::{RangeSummary, VarianceSummary};

pub fn fmt_variance(v: Option<f64>) -> String {
    v.map_or_else(|| "undefined".to_string(), |v| format!("{v:.6e}"))
}

pub fn variance_table(rows: &[VarianceSummary]) -> String {
    let mut out = format!("{:>8} {:>6} {:>14} {:>14}\n", "threads", "n", "mean", "variance");
    for r in rows {
        out.push_str(&format!(
            "{:>8} {:>6} {:>14.6e} {:>14}\n",
            r.number_threads,
            r.count,
            r.mean,
            fmt_variance(r.variance)
        ));
    }
    out
}

pub fn range_table(rows: &[RangeSummary]) -> String {
    let mut out = format!("{:>8} {:>6} {:>14} {:>14} {:>14}\n", "threads", "n", "mean", "best", "worst");
    for r in rows {
        out.push_str(&format!(
            "{:>8} {:>6} {:>14.6e} {:>14.6e} {:>14.6e}\n",
            r.number_threads, r.count, r.mean, r.min, r.max
        ));
    }
    out
}
