use thiserror::Error;

/// Invalid-input conditions for the meta-analytic core.
///
/// Degenerate-but-computable results (a zero standard error) are not errors:
/// they propagate as non-finite numerics in [`crate::MetaResult`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetaError {
    #[error("study set has no valid records after cleaning")]
    EmptyStudySet,
    #[error("total sample size across studies is zero")]
    ZeroTotalWeight,
}

pub type Result<T> = std::result::Result<T, MetaError>;
