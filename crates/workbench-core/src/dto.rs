use crate::domain::InteractionType;
use crate::filter::InteractionFilter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of a search call. Paging fields are required; filters are optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequestDto {
    #[serde(default)]
    pub customer_id: Option<i64>,
    #[serde(default)]
    pub interaction_type: Option<InteractionType>,
    #[serde(default)]
    pub timestamp_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub timestamp_end: Option<DateTime<Utc>>,
    pub page_number: u32,
    pub page_size: u32,
}

impl SearchRequestDto {
    pub fn filter(&self) -> InteractionFilter {
        InteractionFilter {
            customer_id: self.customer_id,
            interaction_type: self.interaction_type,
            timestamp_start: self.timestamp_start,
            timestamp_end: self.timestamp_end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestReportDto {
    pub inserted: usize,
}
