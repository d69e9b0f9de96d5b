use workbench_core::time::to_micros;
use workbench_core::{InteractionFilter, PageRequest};
use rusqlite::types::Value;

const INTERACTION_COLUMNS: &str = "id, product_id, customer_id, customer_rating, feedback, timestamp_us, responses_from_customer_support, interaction_type, message";

pub struct SqlQuery {
    pub sql: String,
    pub params: Vec<Value>,
}

/// Translates an `InteractionFilter` into SQL predicates.
#[derive(Debug, Clone)]
pub struct InteractionQuery {
    clauses: Vec<String>,
    params: Vec<Value>,
}

impl InteractionQuery {
    pub fn from_filter(filter: &InteractionFilter) -> Self {
        let mut clauses: Vec<String> = Vec::new();
        let mut params: Vec<Value> = Vec::new();

        if let Some(customer_id) = filter.customer_id {
            clauses.push("customer_id = ?".to_string());
            params.push(Value::from(customer_id));
        }

        if let Some(kind) = filter.interaction_type {
            clauses.push("interaction_type = ?".to_string());
            params.push(Value::from(kind.as_str().to_string()));
        }

        // A missing timestamp cannot satisfy a bound.
        if filter.has_time_bounds() {
            clauses.push("timestamp_us IS NOT NULL".to_string());
        }
        if let Some(start) = filter.timestamp_start {
            clauses.push("timestamp_us >= ?".to_string());
            params.push(Value::from(to_micros(&start)));
        }
        if let Some(end) = filter.timestamp_end {
            clauses.push("timestamp_us <= ?".to_string());
            params.push(Value::from(to_micros(&end)));
        }

        Self { clauses, params }
    }

    pub fn count_sql(&self) -> SqlQuery {
        let mut sql = String::from("SELECT COUNT(*) FROM customer_interactions");
        self.push_where(&mut sql);
        SqlQuery {
            sql,
            params: self.params.clone(),
        }
    }

    pub fn page_sql(&self, page: PageRequest) -> SqlQuery {
        let mut sql = format!("SELECT {INTERACTION_COLUMNS} FROM customer_interactions");
        self.push_where(&mut sql);
        sql.push_str(" ORDER BY id ASC LIMIT ? OFFSET ?");

        let mut params = self.params.clone();
        params.push(Value::from(page.limit()));
        params.push(Value::from(page.offset()));
        SqlQuery { sql, params }
    }

    fn push_where(&self, sql: &mut String) {
        if !self.clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.clauses.join(" AND "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::InteractionQuery;
    use chrono::{TimeZone, Utc};
    use workbench_core::{InteractionFilter, InteractionType, PageRequest};

    #[test]
    fn empty_filter_has_no_where_clause() {
        let query = InteractionQuery::from_filter(&InteractionFilter::default());
        let count = query.count_sql();
        assert_eq!(count.sql, "SELECT COUNT(*) FROM customer_interactions");
        assert!(count.params.is_empty());

        let page = query.page_sql(PageRequest::new(2, 10).unwrap());
        assert!(page.sql.ends_with("ORDER BY id ASC LIMIT ? OFFSET ?"));
        assert_eq!(page.params.len(), 2);
    }

    #[test]
    fn all_predicates_are_joined() {
        let filter = InteractionFilter {
            customer_id: Some(1),
            interaction_type: Some(InteractionType::Chat),
            timestamp_start: Some(Utc.timestamp_opt(10, 0).unwrap()),
            timestamp_end: Some(Utc.timestamp_opt(20, 0).unwrap()),
        };
        let count = InteractionQuery::from_filter(&filter).count_sql();
        assert!(count.sql.contains(
            "WHERE customer_id = ? AND interaction_type = ? AND timestamp_us IS NOT NULL AND timestamp_us >= ? AND timestamp_us <= ?"
        ));
        assert_eq!(count.params.len(), 4);
    }
}
