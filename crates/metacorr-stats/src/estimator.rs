//! Sample-size-weighted pooled correlation and its test statistics.

use statrs::distribution::{ContinuousCDF, Normal};

use metacorr_model::{MetaError, MetaResult, Result, StudySet};

/// Compute the pooled correlation, weighted standard deviation, standard
/// error, Z-statistic, and two-sided p-value for a study set.
///
/// The input is cleaned first; records violating the semantic constraints
/// do not contribute. Pure and deterministic: repeated calls on the same
/// snapshot return bit-identical results.
///
/// # Errors
///
/// - [`MetaError::EmptyStudySet`] when no valid records remain after cleaning.
/// - [`MetaError::ZeroTotalWeight`] when the sample sizes sum to zero.
pub fn compute_meta(records: &StudySet) -> Result<MetaResult> {
    let cleaned = records.cleaned();
    if cleaned.is_empty() {
        return Err(MetaError::EmptyStudySet);
    }

    let total_n: f64 = cleaned.iter().map(|record| record.n as f64).sum();
    if total_n == 0.0 {
        return Err(MetaError::ZeroTotalWeight);
    }

    // Weighted mean centered on the first correlation. Centering keeps a
    // single study (and identical correlations in general) at exactly zero
    // deviation, so the degenerate case truly yields weighted_sd == 0.
    let center = cleaned.records()[0].r;
    let centered_sum: f64 = cleaned
        .iter()
        .map(|record| record.n as f64 * (record.r - center))
        .sum();
    let pooled_r = center + centered_sum / total_n;

    let weighted_sq_dev: f64 = cleaned
        .iter()
        .map(|record| record.n as f64 * (record.r - pooled_r).powi(2))
        .sum();
    let weighted_sd = (weighted_sq_dev / total_n).sqrt();

    // Denominator is the study count, not the total weight. Unusual, but it
    // is the defined behavior of the reference computation.
    let k = cleaned.len() as f64;
    let standard_error = weighted_sd / k.sqrt();

    let z_statistic = pooled_r / standard_error;
    let p_value = pvalue_z(z_statistic);

    Ok(MetaResult {
        pooled_r,
        weighted_sd,
        standard_error,
        z_statistic,
        p_value,
    })
}

/// Two-tailed p-value from a z-statistic under the standard normal
/// distribution: `P(|Z| > |z|) = 2 * (1 - Phi(|z|))`.
///
/// Returns NaN for a non-finite z, which is how a zero standard error
/// surfaces to callers.
pub fn pvalue_z(z: f64) -> f64 {
    if !z.is_finite() {
        return f64::NAN;
    }
    let normal = Normal::new(0.0, 1.0).expect("unit normal is well-formed");
    2.0 * (1.0 - normal.cdf(z.abs()))
}
