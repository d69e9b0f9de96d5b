use workbench_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite error: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("record {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: CoreError,
    },
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("migration error: {0}")]
    Migration(String),
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
    #[error("invalid stored data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    Sql,
    InvalidRecord,
    Constraint,
    MissingHomeDir,
    Migration,
    InvalidDataPath,
    InvalidData,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io(_) => StoreErrorKind::Io,
            StoreError::Sql(_) => StoreErrorKind::Sql,
            StoreError::InvalidRecord { .. } => StoreErrorKind::InvalidRecord,
            StoreError::Constraint(_) => StoreErrorKind::Constraint,
            StoreError::MissingHomeDir => StoreErrorKind::MissingHomeDir,
            StoreError::Migration(_) => StoreErrorKind::Migration,
            StoreError::InvalidDataPath(_) => StoreErrorKind::InvalidDataPath,
            StoreError::InvalidData(_) => StoreErrorKind::InvalidData,
        }
    }

    /// True when the caller sent data the store refuses to keep.
    pub fn is_rejected_input(&self) -> bool {
        matches!(
            self.kind(),
            StoreErrorKind::InvalidRecord | StoreErrorKind::Constraint
        )
    }
}

/// Splits SQLite constraint failures out of generic SQL errors.
pub(crate) fn map_sql_error(err: rusqlite::Error) -> StoreError {
    match err.sqlite_error_code() {
        Some(rusqlite::ErrorCode::ConstraintViolation) => StoreError::Constraint(err.to_string()),
        _ => StoreError::Sql(err),
    }
}
