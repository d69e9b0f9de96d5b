use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use workbench_core::time::{format_timestamp, parse_timestamp};
use workbench_core::InteractionType;

pub fn parse_time_bound(raw: &str) -> Result<DateTime<Utc>> {
    parse_timestamp(raw).with_context(|| format!("invalid timestamp {raw:?}"))
}

pub fn parse_interaction_type(raw: &str) -> Result<InteractionType> {
    Ok(raw.parse::<InteractionType>()?)
}

pub fn format_optional_timestamp(ts: Option<&DateTime<Utc>>) -> String {
    ts.map(format_timestamp).unwrap_or_else(|| "-".to_string())
}

pub fn truncate_for_table(text: Option<&str>, max_chars: usize) -> String {
    let Some(text) = text else {
        return "-".to_string();
    };
    let single_line = text.replace(['\n', '\r'], " ");
    if single_line.chars().count() <= max_chars {
        return single_line;
    }
    let mut out: String = single_line.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}
