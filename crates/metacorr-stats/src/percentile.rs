//! Percentiles over a bootstrap distribution, with linear interpolation
//! between nearest ranks (the conventional definition).

/// Compute the `percentile`-th percentile of `samples`.
///
/// Returns NaN for an empty slice; a single sample is its own percentile
/// for every rank.
pub fn percentile(samples: &[f64], percentile: f64) -> f64 {
    if samples.is_empty() {
        return f64::NAN;
    }
    if samples.len() == 1 {
        return samples[0];
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = (percentile / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (lower + 1).min(sorted.len() - 1);
    let fraction = rank - lower as f64;

    sorted[lower] + fraction * (sorted[upper] - sorted[lower])
}

/// Round to 3 decimal places, matching the display granularity of the
/// bootstrap distribution.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
