use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("product id is required")]
    MissingProductId,
    #[error("customer id is required")]
    MissingCustomerId,
    #[error("{field} exceeds {max} characters (got {len})")]
    TextTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
    #[error("invalid interaction type: {0}")]
    InvalidInteractionType(String),
    #[error("invalid page size: {0} (must be greater than zero)")]
    InvalidPageSize(u32),
}
