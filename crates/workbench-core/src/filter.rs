use crate::domain::{CustomerInteraction, InteractionType};
use chrono::{DateTime, Utc};

/// Optional search predicates; `None` on a dimension matches every record.
///
/// Timestamp bounds are inclusive. A record without a timestamp matches only
/// when neither bound is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionFilter {
    pub customer_id: Option<i64>,
    pub interaction_type: Option<InteractionType>,
    pub timestamp_start: Option<DateTime<Utc>>,
    pub timestamp_end: Option<DateTime<Utc>>,
}

impl InteractionFilter {
    pub fn has_time_bounds(&self) -> bool {
        self.timestamp_start.is_some() || self.timestamp_end.is_some()
    }

    pub fn matches(&self, interaction: &CustomerInteraction) -> bool {
        if let Some(customer_id) = self.customer_id {
            if interaction.customer_id != customer_id {
                return false;
            }
        }
        if let Some(kind) = self.interaction_type {
            if interaction.interaction_type != Some(kind) {
                return false;
            }
        }
        if !self.has_time_bounds() {
            return true;
        }
        let Some(timestamp) = interaction.timestamp else {
            return false;
        };
        self.timestamp_start.map_or(true, |start| timestamp >= start)
            && self.timestamp_end.map_or(true, |end| timestamp <= end)
    }
}
