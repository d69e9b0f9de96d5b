use crate::error::{map_sql_error, Result, StoreError};
use crate::query::InteractionQuery;
use rusqlite::{params, params_from_iter, Connection};
use tracing::debug;
use workbench_core::time::{from_micros, to_micros};
use workbench_core::{
    validate_interaction, CustomerInteraction, CustomerInteractionNew, InteractionFilter,
    InteractionId, InteractionType, Page, PageRequest,
};

pub struct InteractionsRepo<'a> {
    conn: &'a Connection,
}

impl<'a> InteractionsRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Stores every record in one transaction and returns them with their new ids.
    ///
    /// Records are validated up front; if any record or insert fails, nothing is
    /// committed.
    pub fn insert_all(
        &self,
        inputs: Vec<CustomerInteractionNew>,
    ) -> Result<Vec<CustomerInteraction>> {
        if inputs.is_empty() {
            return Ok(Vec::new());
        }

        for (index, input) in inputs.iter().enumerate() {
            validate_interaction(input)
                .map_err(|source| StoreError::InvalidRecord { index, source })?;
        }

        let tx = self.conn.unchecked_transaction()?;
        let mut stored = Vec::with_capacity(inputs.len());
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO customer_interactions
                    (product_id, customer_id, customer_rating, feedback, timestamp_us,
                     responses_from_customer_support, interaction_type, message)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            )?;
            for (index, input) in inputs.into_iter().enumerate() {
                stmt.execute(params![
                    input.product_id,
                    input.customer_id,
                    input.customer_rating,
                    input.feedback,
                    input.timestamp.as_ref().map(to_micros),
                    input.responses_from_customer_support,
                    input.interaction_type.map(|kind| kind.as_str()),
                    input.message,
                ])
                .map_err(map_sql_error)?;
                let id = InteractionId(tx.last_insert_rowid());
                let interaction = input
                    .into_stored(id)
                    .map_err(|source| StoreError::InvalidRecord { index, source })?;
                stored.push(interaction);
            }
        }
        tx.commit()?;

        debug!(count = stored.len(), "inserted interactions");
        Ok(stored)
    }

    /// Returns one page of matching records, ordered by id, with the total match count.
    pub fn find(
        &self,
        filter: &InteractionFilter,
        page: PageRequest,
    ) -> Result<Page<CustomerInteraction>> {
        let query = InteractionQuery::from_filter(filter);
        let tx = self.conn.unchecked_transaction()?;

        let count = query.count_sql();
        let total: i64 = tx.query_row(&count.sql, params_from_iter(count.params.iter()), |row| {
            row.get(0)
        })?;

        let mut content = Vec::new();
        if total > page.offset() {
            let select = query.page_sql(page);
            let mut stmt = tx.prepare(&select.sql)?;
            let mut rows = stmt.query(params_from_iter(select.params.iter()))?;
            while let Some(row) = rows.next()? {
                content.push(interaction_from_row(row)?);
            }
        }
        tx.commit()?;

        debug!(
            total,
            returned = content.len(),
            page = page.page_number(),
            size = page.page_size(),
            "searched interactions"
        );
        Ok(Page {
            content,
            total_elements: row_count(total)?,
        })
    }

    pub fn count(&self) -> Result<u64> {
        let total: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM customer_interactions;",
            [],
            |row| row.get(0),
        )?;
        row_count(total)
    }

    /// Deletes every record. Ids are not reused afterwards.
    pub fn clear(&self) -> Result<usize> {
        let removed = self.conn.execute("DELETE FROM customer_interactions;", [])?;
        debug!(removed, "cleared interactions");
        Ok(removed)
    }
}

fn row_count(total: i64) -> Result<u64> {
    u64::try_from(total)
        .map_err(|_| StoreError::InvalidData(format!("negative row count {total}")))
}

fn parse_kind(raw: &str) -> Result<InteractionType> {
    raw.parse::<InteractionType>()
        .map_err(|_| StoreError::InvalidData(format!("unknown interaction type {raw:?}")))
}

fn interaction_from_row(row: &rusqlite::Row<'_>) -> Result<CustomerInteraction> {
    let timestamp = match row.get::<_, Option<i64>>(5)? {
        Some(micros) => Some(from_micros(micros).ok_or_else(|| {
            StoreError::InvalidData(format!("timestamp out of range: {micros}"))
        })?),
        None => None,
    };
    let interaction_type = match row.get::<_, Option<String>>(7)? {
        Some(raw) => Some(parse_kind(&raw)?),
        None => None,
    };
    Ok(CustomerInteraction {
        id: InteractionId(row.get(0)?),
        product_id: row.get(1)?,
        customer_id: row.get(2)?,
        customer_rating: row.get(3)?,
        feedback: row.get(4)?,
        timestamp,
        responses_from_customer_support: row.get(6)?,
        interaction_type,
        message: row.get(8)?,
    })
}
