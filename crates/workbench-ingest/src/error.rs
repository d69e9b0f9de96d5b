use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("malformed delimited text: {0}")]
    Csv(#[from] csv::Error),
    #[error("duplicate column in header: {0}")]
    DuplicateColumn(String),
    #[error("row {row}, column {column}: invalid value {value:?}: {reason}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
