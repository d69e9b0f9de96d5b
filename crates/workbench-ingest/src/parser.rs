use crate::columns::{self, ColumnSpec};
use crate::error::{IngestError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use tracing::debug;
use workbench_core::CustomerInteractionNew;

#[derive(Debug, Clone, Default)]
pub struct ParsedBatch {
    pub interactions: Vec<CustomerInteractionNew>,
    pub ignored_columns: Vec<String>,
}

/// Parses header-led, comma-delimited text into interaction records.
///
/// The whole batch fails on the first malformed row or uncoercible cell, so a
/// caller never sees a partial result.
pub fn parse_interactions<R: Read>(reader: R) -> Result<ParsedBatch> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let (binding, ignored_columns) = bind_headers(&headers)?;
    if !ignored_columns.is_empty() {
        debug!(columns = ?ignored_columns, "ignoring unknown columns");
    }

    let mut interactions = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        interactions.push(parse_row(index + 1, &record, &binding)?);
    }

    debug!(rows = interactions.len(), "parsed interaction rows");
    Ok(ParsedBatch {
        interactions,
        ignored_columns,
    })
}

pub fn parse_interactions_str(data: &str) -> Result<ParsedBatch> {
    parse_interactions(data.as_bytes())
}

type Binding = Vec<Option<&'static ColumnSpec>>;

fn bind_headers(headers: &StringRecord) -> Result<(Binding, Vec<String>)> {
    let mut binding: Binding = Vec::with_capacity(headers.len());
    let mut ignored = Vec::new();

    for header in headers.iter() {
        match columns::lookup(header) {
            Some(spec) => {
                if binding.iter().flatten().any(|bound| bound.name == spec.name) {
                    return Err(IngestError::DuplicateColumn(spec.name.to_string()));
                }
                binding.push(Some(spec));
            }
            None => {
                ignored.push(header.trim().to_string());
                binding.push(None);
            }
        }
    }

    Ok((binding, ignored))
}

fn parse_row(row: usize, record: &StringRecord, binding: &Binding) -> Result<CustomerInteractionNew> {
    let mut item = CustomerInteractionNew::default();
    for (raw, spec) in record.iter().zip(binding.iter()) {
        let Some(spec) = spec else {
            continue;
        };
        let blank = if spec.text {
            raw.is_empty()
        } else {
            raw.trim().is_empty()
        };
        if blank {
            continue;
        }
        (spec.set)(&mut item, raw).map_err(|reason| IngestError::InvalidValue {
            row,
            column: spec.name,
            value: raw.to_string(),
            reason,
        })?;
    }
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use workbench_core::InteractionType;

    const HEADER: &str = "product_id,customer_id,customer_rating,feedback,timestamp,responses_from_customer_support,interaction_type,message";

    #[test]
    fn parse_full_rows_in_order() {
        let data = format!(
            "{HEADER}\n\
             10,1,5,Great,2024-01-02T03:04:05Z,Glad to help,CHAT,Hello\n\
             11,2,,,,,email,\n"
        );
        let parsed = parse_interactions_str(&data).expect("parse");
        assert_eq!(parsed.interactions.len(), 2);
        assert!(parsed.ignored_columns.is_empty());

        let first = &parsed.interactions[0];
        assert_eq!(first.product_id, Some(10));
        assert_eq!(first.customer_id, Some(1));
        assert_eq!(first.customer_rating, Some(5));
        assert_eq!(first.feedback.as_deref(), Some("Great"));
        assert_eq!(
            first.timestamp,
            Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap())
        );
        assert_eq!(
            first.responses_from_customer_support.as_deref(),
            Some("Glad to help")
        );
        assert_eq!(first.interaction_type, Some(InteractionType::Chat));
        assert_eq!(first.message.as_deref(), Some("Hello"));

        let second = &parsed.interactions[1];
        assert_eq!(second.product_id, Some(11));
        assert_eq!(second.customer_rating, None);
        assert_eq!(second.feedback, None);
        assert_eq!(second.timestamp, None);
        assert_eq!(second.interaction_type, Some(InteractionType::Email));
    }

    #[test]
    fn missing_and_unknown_columns() {
        let data = "customer_id,nickname,interaction_type\n3,bob,CALL\n";
        let parsed = parse_interactions_str(data).expect("parse");
        assert_eq!(parsed.ignored_columns, vec!["nickname".to_string()]);
        let item = &parsed.interactions[0];
        assert_eq!(item.customer_id, Some(3));
        assert_eq!(item.product_id, None);
        assert_eq!(item.interaction_type, Some(InteractionType::Call));
    }

    #[test]
    fn quoted_fields_keep_commas_and_newlines() {
        let data = "product_id,customer_id,feedback\n1,2,\"slow, but \"\"fine\"\"\nthanks\"\n";
        let parsed = parse_interactions_str(data).expect("parse");
        assert_eq!(
            parsed.interactions[0].feedback.as_deref(),
            Some("slow, but \"fine\"\nthanks")
        );
    }

    #[test]
    fn non_integer_fails_whole_batch() {
        let data = "product_id,customer_id\n1,1\n2,abc\n3,3\n";
        let err = parse_interactions_str(data).unwrap_err();
        match err {
            IngestError::InvalidValue {
                row, column, value, ..
            } => {
                assert_eq!(row, 2);
                assert_eq!(column, "customer_id");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn whitespace_text_is_kept_but_blank_typed_cells_are_absent() {
        let data = "product_id,customer_id,customer_rating,feedback,message\n1,2,  ,   , \n";
        let parsed = parse_interactions_str(data).expect("parse");
        let item = &parsed.interactions[0];
        assert_eq!(item.customer_rating, None);
        assert_eq!(item.feedback.as_deref(), Some("   "));
        assert_eq!(item.message.as_deref(), Some(" "));
    }

    #[test]
    fn unknown_interaction_type_fails() {
        let data = "product_id,customer_id,interaction_type\n1,1,FAX\n";
        let err = parse_interactions_str(data).unwrap_err();
        assert!(err.to_string().contains("interaction_type"));
    }

    #[test]
    fn ragged_row_is_malformed() {
        let data = "product_id,customer_id\n1,1,extra\n";
        let err = parse_interactions_str(data).unwrap_err();
        assert!(matches!(err, IngestError::Csv(_)));
    }

    #[test]
    fn duplicate_column_rejected() {
        let data = "product_id,Product_Id\n1,2\n";
        let err = parse_interactions_str(data).unwrap_err();
        assert!(matches!(err, IngestError::DuplicateColumn(name) if name == "product_id"));
    }

    #[test]
    fn header_only_and_empty_inputs_yield_nothing() {
        assert!(parse_interactions_str("product_id,customer_id\n")
            .expect("parse")
            .interactions
            .is_empty());
        assert!(parse_interactions_str("")
            .expect("parse")
            .interactions
            .is_empty());
    }
}
