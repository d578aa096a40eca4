pub mod builtin;
pub mod csv_ingest;
pub mod error;

pub use builtin::{builtin_csv, builtin_study_set};
pub use csv_ingest::{CsvLoad, load_study_csv};
pub use error::{IngestError, Result};
