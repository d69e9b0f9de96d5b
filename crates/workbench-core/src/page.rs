use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// Zero-based page index plus a page size that is always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: u32,
    page_size: u32,
}

impl PageRequest {
    pub fn new(page_number: u32, page_size: u32) -> Result<Self, CoreError> {
        if page_size == 0 {
            return Err(CoreError::InvalidPageSize(page_size));
        }
        Ok(Self {
            page_number,
            page_size,
        })
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    /// Rows to skip. Offsets beyond `i64::MAX` saturate, which is past any stored row.
    pub fn offset(&self) -> i64 {
        let rows = u64::from(self.page_number) * u64::from(self.page_size);
        i64::try_from(rows).unwrap_or(i64::MAX)
    }
}

/// One slice of a filtered result set plus the size of the whole set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
}
