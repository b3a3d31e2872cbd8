use crate::summary::Policy;

pub enum Command {
    /// Full pipeline; `None` uses the configured policy.
    Plot { policy: Option<Policy> },
    /// Load and aggregate only, print the per-group table.
    Summarize { policy: Option<Policy> },
    /// Print the effective configuration.
    ShowConfig,
}
