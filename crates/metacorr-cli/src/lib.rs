//! Library components for the metacorr CLI.

pub mod analysis;
pub mod logging;
