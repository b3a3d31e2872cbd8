use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a group with a single trial reports its variance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SingletonVariance {
    /// Report a variance of 0.0.
    #[default]
    Zero,
    /// Report the variance as undefined (`None`); charts draw no band there.
    Undefined,
    /// Drop the group from the variance summary.
    Exclude,
}

impl FromStr for SingletonVariance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zero" => Ok(Self::Zero),
            "undefined" | "nan" => Ok(Self::Undefined),
            "exclude" => Ok(Self::Exclude),
            other => Err(format!("unknown singleton variance policy `{other}` (zero|undefined|exclude)")),
        }
    }
}

/// Aggregation policy selecting which chart is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    #[default]
    Variance,
    Range,
    Both,
}

impl Policy {
    #[must_use]
    pub fn includes_variance(self) -> bool {
        matches!(self, Policy::Variance | Policy::Both)
    }

    #[must_use]
    pub fn includes_range(self) -> bool {
        matches!(self, Policy::Range | Policy::Both)
    }
}

impl FromStr for Policy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "variance" | "var" => Ok(Self::Variance),
            "range" | "minmax" => Ok(Self::Range),
            "both" | "all" => Ok(Self::Both),
            other => Err(format!("unknown policy `{other}` (variance|range|both)")),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Policy::Variance => "variance",
            Policy::Range => "range",
            Policy::Both => "both",
        })
    }
}
