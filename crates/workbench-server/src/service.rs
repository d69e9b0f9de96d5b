use std::io::Read;

use thiserror::Error;
use tracing::info;
use workbench_core::{
    CoreError, CustomerInteraction, CustomerInteractionNew, InteractionFilter, Page, PageRequest,
};
use workbench_ingest::{parse_interactions, IngestError};
use workbench_store::error::StoreError;
use workbench_store::Store;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("ingest failed: {0}")]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Ingest and search over an injected store. Holds no state of its own.
pub struct InteractionService<'a> {
    store: &'a Store,
}

impl<'a> InteractionService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Parses delimited text and stores every row, or nothing if any row fails.
    pub fn ingest_from_text<R: Read>(&self, reader: R) -> Result<usize> {
        let batch = parse_interactions(reader)?;
        let stored = self.store.interactions().insert_all(batch.interactions)?;
        info!(
            inserted = stored.len(),
            ignored_columns = ?batch.ignored_columns,
            "ingested delimited text"
        );
        Ok(stored.len())
    }

    /// Stores already-structured records; required-field checks happen in the store.
    pub fn ingest_structured(&self, records: Vec<CustomerInteractionNew>) -> Result<usize> {
        let stored = self.store.interactions().insert_all(records)?;
        info!(inserted = stored.len(), "ingested structured records");
        Ok(stored.len())
    }

    pub fn search(
        &self,
        filter: &InteractionFilter,
        page_number: u32,
        page_size: u32,
    ) -> Result<Page<CustomerInteraction>> {
        let page = PageRequest::new(page_number, page_size)?;
        Ok(self.store.interactions().find(filter, page)?)
    }
}
