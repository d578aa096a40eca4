use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("study table is missing required column '{name}'")]
    MissingColumn { name: String },
}

pub type Result<T> = std::result::Result<T, IngestError>;
