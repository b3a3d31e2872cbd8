use serde::Serialize;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::errors::{Result, Stage};
use crate::import::load_file;
use crate::naming::{Clock, SystemClock, range_chart_name, variance_chart_name};
use crate::render::{stage_range_chart, stage_variance_chart};
use crate::summary::{Policy, RangeSummary, VarianceSummary, summarize_range, summarize_variance};
use crate::types::BenchmarkDataset;
use crate::utils::fsutil::{StagedFile, ensure_output_directory, stray_temp_files};

/// Outcome of one pipeline run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub records: usize,
    pub groups: usize,
    pub charts: Vec<PathBuf>,
}

/// Load → aggregate → render → persist, driven by an explicit configuration
/// and an injected clock.
pub struct BenchmarkSummarizer<C: Clock = SystemClock> {
    config: AppConfig,
    clock: C,
}

impl BenchmarkSummarizer<SystemClock> {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> BenchmarkSummarizer<C> {
    #[must_use]
    pub fn with_clock(config: AppConfig, clock: C) -> Self {
        Self { config, clock }
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// # Errors
    /// See [`crate::import::load_file`].
    pub fn load(&self) -> Result<BenchmarkDataset> {
        load_file(&self.config.input_path, &self.config.import_options())
    }

    #[must_use]
    pub fn summarize_variance(&self, dataset: &BenchmarkDataset) -> Vec<VarianceSummary> {
        summarize_variance(dataset, self.config.singleton_variance)
    }

    #[must_use]
    pub fn summarize_range(&self, dataset: &BenchmarkDataset) -> Vec<RangeSummary> {
        summarize_range(dataset, self.config.offset)
    }

    #[must_use]
    pub fn variance_chart_path(&self) -> PathBuf {
        self.config.output_dir.join(variance_chart_name(self.clock.today()))
    }

    #[must_use]
    pub fn range_chart_path(&self) -> PathBuf {
        self.config.output_dir.join(range_chart_name(self.clock.today(), &self.config.range_label))
    }

    /// Run the whole pipeline for `policy`.
    ///
    /// # Errors
    /// The first failing stage's error; later stages are not attempted.
    pub fn run(&self, policy: Policy) -> Result<RunReport> {
        log::info!("stage={} input={}", Stage::Load, self.config.input_path.display());
        let dataset = self.load()?;

        log::info!("stage={} policy={policy} records={}", Stage::Aggregate, dataset.len());
        let variance = policy.includes_variance().then(|| self.summarize_variance(&dataset));
        let range = policy.includes_range().then(|| self.summarize_range(&dataset));
        let groups = variance.as_ref().map(Vec::len).or(range.as_ref().map(Vec::len)).unwrap_or(0);

        ensure_output_directory(&self.config.output_dir)?;
        let chart_opts = self.config.chart_options();
        // every chart is drawn before any is moved into place
        let mut staged = Vec::new();
        if let Some(summaries) = &variance {
            let path = self.variance_chart_path();
            log::info!("stage={} chart={}", Stage::Render, path.display());
            staged.push(stage_variance_chart(summaries, &path, &chart_opts)?);
        }
        if let Some(summaries) = &range {
            let path = self.range_chart_path();
            log::info!("stage={} chart={}", Stage::Render, path.display());
            staged.push(stage_range_chart(summaries, &path, &chart_opts)?);
        }
        let charts = staged.into_iter().map(StagedFile::commit).collect::<Result<Vec<_>>>()?;

        let strays = stray_temp_files(&self.config.output_dir);
        if !strays.is_empty() {
            log::warn!("{} leftover temp file(s) in {}", strays.len(), self.config.output_dir.display());
        }
        log::info!("stage={} wrote {} chart(s)", Stage::Save, charts.len());
        Ok(RunReport { records: dataset.len(), groups, charts })
    }
}
