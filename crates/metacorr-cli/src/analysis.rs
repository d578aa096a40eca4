//! Analysis pipeline: load a study table, clean it, run the estimator, then
//! the resampler. Statistics are withheld entirely when the snapshot is
//! invalid; the caller never sees a partially computed report.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use metacorr_ingest::load_study_csv;
use metacorr_model::{BootstrapResult, MetaResult};
use metacorr_stats::{BootstrapOptions, bootstrap_ci, compute_meta};

/// Knobs for one analysis run.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzeOptions {
    pub iterations: usize,
    pub seed: Option<u64>,
    pub skip_bootstrap: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            iterations: metacorr_stats::DEFAULT_ITERATIONS,
            seed: None,
            skip_bootstrap: false,
        }
    }
}

/// Complete output of one analysis run, serializable for `--json` consumers
/// (the bootstrap sample vector is included so a histogram can be driven
/// downstream).
#[derive(Debug, Clone, serde::Serialize)]
pub struct AnalysisReport {
    pub source: String,
    pub studies_used: usize,
    pub rows_dropped: usize,
    pub meta: MetaResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bootstrap: Option<BootstrapResult>,
}

/// Run the full analysis over a CSV study table.
pub fn analyze_table(path: &Path, options: &AnalyzeOptions) -> Result<AnalysisReport> {
    let span = info_span!("analyze", table = %path.display());
    let _guard = span.enter();

    let load_start = Instant::now();
    let load = load_study_csv(path).with_context(|| format!("load {}", path.display()))?;
    info!(
        loaded = load.loaded,
        dropped = load.dropped,
        duration_ms = load_start.elapsed().as_millis(),
        "study table loaded"
    );

    let meta = compute_meta(&load.records).context("compute pooled statistics")?;
    info!(
        pooled_r = meta.pooled_r,
        standard_error = meta.standard_error,
        degenerate = meta.is_degenerate(),
        "estimator complete"
    );

    let bootstrap = if options.skip_bootstrap {
        None
    } else {
        let bootstrap_start = Instant::now();
        let bootstrap_options = BootstrapOptions::default()
            .with_iterations(options.iterations)
            .with_seed(options.seed);
        let result = bootstrap_ci(&load.records, &bootstrap_options)
            .context("compute bootstrap interval")?;
        info!(
            iterations = options.iterations,
            lower_ci = result.lower_ci,
            upper_ci = result.upper_ci,
            duration_ms = bootstrap_start.elapsed().as_millis(),
            "bootstrap complete"
        );
        Some(result)
    };

    // Parse failures and semantic-constraint violations both count as drops.
    let studies_used = load.records.cleaned().len();
    let rows_dropped = load.dropped + (load.loaded - studies_used);

    Ok(AnalysisReport {
        source: path.display().to_string(),
        studies_used,
        rows_dropped,
        meta,
        bootstrap,
    })
}
