//! Property tests for the estimator and resampler over arbitrary valid
//! study sets.

use proptest::prelude::*;

use metacorr_model::{StudyRecord, StudySet};
use metacorr_stats::{BootstrapOptions, bootstrap_ci, compute_meta};

fn valid_study_sets() -> impl Strategy<Value = StudySet> {
    prop::collection::vec((2u64..500, -1.0f64..=1.0), 1..20)
        .prop_map(|pairs| pairs.into_iter().map(|(n, r)| StudyRecord::new(n, r)).collect())
}

proptest! {
    #[test]
    fn pooled_r_is_bounded(records in valid_study_sets()) {
        let result = compute_meta(&records).unwrap();
        prop_assert!(result.pooled_r >= -1.0 - 1e-12);
        prop_assert!(result.pooled_r <= 1.0 + 1e-12);
    }

    #[test]
    fn dispersion_statistics_are_non_negative(records in valid_study_sets()) {
        let result = compute_meta(&records).unwrap();
        prop_assert!(result.weighted_sd >= 0.0);
        prop_assert!(result.standard_error >= 0.0);
    }

    #[test]
    fn pvalue_stays_in_unit_interval(records in valid_study_sets()) {
        let result = compute_meta(&records).unwrap();
        if result.z_statistic.is_finite() {
            prop_assert!(result.p_value >= 0.0);
            prop_assert!(result.p_value <= 1.0);
        } else {
            prop_assert!(result.p_value.is_nan());
        }
    }

    #[test]
    fn estimator_is_order_insensitive(records in valid_study_sets()) {
        let mut reversed: Vec<StudyRecord> = records.records().to_vec();
        reversed.reverse();
        let forward = compute_meta(&records).unwrap();
        let backward = compute_meta(&StudySet::from_records(reversed)).unwrap();
        prop_assert!((forward.pooled_r - backward.pooled_r).abs() < 1e-9);
    }

    #[test]
    fn seeded_bootstrap_is_deterministic(
        records in valid_study_sets(),
        seed in any::<u64>(),
    ) {
        let options = BootstrapOptions::default()
            .with_iterations(50)
            .with_seed(Some(seed));
        let first = bootstrap_ci(&records, &options).unwrap();
        let second = bootstrap_ci(&records, &options).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn bootstrap_interval_is_ordered_and_bounded(records in valid_study_sets()) {
        let options = BootstrapOptions::default()
            .with_iterations(100)
            .with_seed(Some(0));
        let result = bootstrap_ci(&records, &options).unwrap();
        prop_assert!(result.lower_ci <= result.upper_ci);
        prop_assert!(result.lower_ci >= -1.0);
        prop_assert!(result.upper_ci <= 1.0);
    }
}
