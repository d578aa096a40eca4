pub mod error;
pub mod result;
pub mod study;

pub use error::{MetaError, Result};
pub use result::{BootstrapResult, MetaResult};
pub use study::{StudyRecord, StudySet};
