//! Derived statistics. Both result types are immutable value objects,
//! recomputed in full on every change to the underlying study set.

/// Pooled estimate and its test statistics.
///
/// When the weighted standard deviation is zero (for example a single study,
/// or identical correlations throughout), `z_statistic` is non-finite and
/// `p_value` is NaN. Callers are expected to treat those as degenerate
/// results, not as failures.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MetaResult {
    /// Sample-size-weighted mean correlation, bounded by [-1, 1].
    pub pooled_r: f64,
    /// Weighted population standard deviation of the correlations.
    pub weighted_sd: f64,
    /// `weighted_sd / sqrt(k)` where `k` is the number of valid studies.
    pub standard_error: f64,
    /// `pooled_r / standard_error`, tested against a null of zero correlation.
    pub z_statistic: f64,
    /// Two-sided p-value from the standard normal distribution.
    pub p_value: f64,
}

impl MetaResult {
    /// True when the standard error collapsed to zero and the test
    /// statistics are not interpretable.
    pub fn is_degenerate(&self) -> bool {
        !self.z_statistic.is_finite()
    }
}

/// Bootstrap distribution of the pooled correlation and its 95% interval.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BootstrapResult {
    /// One pooled correlation per resample, each rounded to 3 decimals,
    /// in draw order. Suitable for driving a histogram.
    pub samples: Vec<f64>,
    /// 2.5th percentile of `samples`, rounded to 3 decimals.
    pub lower_ci: f64,
    /// 97.5th percentile of `samples`, rounded to 3 decimals.
    pub upper_ci: f64,
}

impl BootstrapResult {
    pub fn iterations(&self) -> usize {
        self.samples.len()
    }
}
