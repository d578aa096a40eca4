//! Meta-analytic core: the weighted-correlation estimator and its bootstrap
//! companion. Both entry points are stateless; every call takes a fresh
//! snapshot of the study set and recomputes from scratch.

pub mod bootstrap;
pub mod estimator;
pub mod percentile;

pub use bootstrap::{BootstrapOptions, DEFAULT_ITERATIONS, bootstrap_ci};
pub use estimator::{compute_meta, pvalue_z};
