//! Header name to record field bindings for delimited-text ingest.

use workbench_core::time::parse_timestamp;
use workbench_core::{CustomerInteractionNew, InteractionType};

pub type Setter = fn(&mut CustomerInteractionNew, &str) -> Result<(), String>;

#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub name: &'static str,
    /// Free-text columns keep cells verbatim; only a truly empty cell is absent.
    pub text: bool,
    pub set: Setter,
}

pub const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        name: "product_id",
        text: false,
        set: set_product_id,
    },
    ColumnSpec {
        name: "customer_id",
        text: false,
        set: set_customer_id,
    },
    ColumnSpec {
        name: "customer_rating",
        text: false,
        set: set_customer_rating,
    },
    ColumnSpec {
        name: "feedback",
        text: true,
        set: set_feedback,
    },
    ColumnSpec {
        name: "timestamp",
        text: false,
        set: set_timestamp,
    },
    ColumnSpec {
        name: "responses_from_customer_support",
        text: true,
        set: set_responses_from_customer_support,
    },
    ColumnSpec {
        name: "interaction_type",
        text: false,
        set: set_interaction_type,
    },
    ColumnSpec {
        name: "message",
        text: true,
        set: set_message,
    },
];

/// Finds the binding for a header cell. Matching ignores surrounding
/// whitespace, a leading byte-order mark, and ASCII case.
pub fn lookup(header: &str) -> Option<&'static ColumnSpec> {
    let name = header.trim_start_matches('\u{feff}').trim();
    COLUMNS.iter().find(|spec| spec.name.eq_ignore_ascii_case(name))
}

fn set_product_id(target: &mut CustomerInteractionNew, raw: &str) -> Result<(), String> {
    target.product_id = Some(parse_int(raw)?);
    Ok(())
}

fn set_customer_id(target: &mut CustomerInteractionNew, raw: &str) -> Result<(), String> {
    target.customer_id = Some(parse_int(raw)?);
    Ok(())
}

fn set_customer_rating(target: &mut CustomerInteractionNew, raw: &str) -> Result<(), String> {
    target.customer_rating = Some(parse_int(raw)?);
    Ok(())
}

fn set_feedback(target: &mut CustomerInteractionNew, raw: &str) -> Result<(), String> {
    target.feedback = Some(raw.to_string());
    Ok(())
}

fn set_timestamp(target: &mut CustomerInteractionNew, raw: &str) -> Result<(), String> {
    target.timestamp = Some(parse_timestamp(raw).map_err(|err| err.to_string())?);
    Ok(())
}

fn set_responses_from_customer_support(
    target: &mut CustomerInteractionNew,
    raw: &str,
) -> Result<(), String> {
    target.responses_from_customer_support = Some(raw.to_string());
    Ok(())
}

fn set_interaction_type(target: &mut CustomerInteractionNew, raw: &str) -> Result<(), String> {
    let kind = raw
        .parse::<InteractionType>()
        .map_err(|err| err.to_string())?;
    target.interaction_type = Some(kind);
    Ok(())
}

fn set_message(target: &mut CustomerInteractionNew, raw: &str) -> Result<(), String> {
    target.message = Some(raw.to_string());
    Ok(())
}

fn parse_int<T>(raw: &str) -> Result<T, String>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    raw.trim()
        .parse::<T>()
        .map_err(|err| format!("expected an integer ({err})"))
}

#[cfg(test)]
mod tests {
    use super::{lookup, COLUMNS};
    use std::collections::HashSet;

    #[test]
    fn column_names_are_unique() {
        let names: HashSet<&str> = COLUMNS.iter().map(|spec| spec.name).collect();
        assert_eq!(names.len(), COLUMNS.len());
    }

    #[test]
    fn only_free_text_columns_are_text() {
        let text: Vec<&str> = COLUMNS
            .iter()
            .filter(|spec| spec.text)
            .map(|spec| spec.name)
            .collect();
        assert_eq!(
            text,
            vec!["feedback", "responses_from_customer_support", "message"]
        );
    }

    #[test]
    fn lookup_tolerates_case_whitespace_and_bom() {
        assert_eq!(lookup(" Customer_ID ").map(|s| s.name), Some("customer_id"));
        assert_eq!(lookup("\u{feff}product_id").map(|s| s.name), Some("product_id"));
        assert!(lookup("email_address").is_none());
    }
}
