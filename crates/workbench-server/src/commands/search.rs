use crate::commands::{print_json, Context, DEFAULT_PAGE_SIZE};
use crate::service::InteractionService;
use crate::util::{
    format_optional_timestamp, parse_interaction_type, parse_time_bound, truncate_for_table,
};
use anyhow::Result;
use clap::Args;
use workbench_core::InteractionFilter;

const MESSAGE_WIDTH: usize = 40;

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(long)]
    pub customer_id: Option<i64>,
    /// CHAT, EMAIL or CALL
    #[arg(long = "type")]
    pub interaction_type: Option<String>,
    /// Inclusive lower timestamp bound
    #[arg(long)]
    pub from: Option<String>,
    /// Inclusive upper timestamp bound
    #[arg(long)]
    pub to: Option<String>,
    #[arg(long, default_value_t = 0)]
    pub page: u32,
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub size: u32,
}

pub fn search(ctx: &Context<'_>, args: SearchArgs) -> Result<()> {
    let filter = InteractionFilter {
        customer_id: args.customer_id,
        interaction_type: args
            .interaction_type
            .as_deref()
            .map(parse_interaction_type)
            .transpose()?,
        timestamp_start: args.from.as_deref().map(parse_time_bound).transpose()?,
        timestamp_end: args.to.as_deref().map(parse_time_bound).transpose()?,
    };

    let page = InteractionService::new(ctx.store).search(&filter, args.page, args.size)?;

    if ctx.json {
        print_json(&page)?;
        return Ok(());
    }

    if page.content.is_empty() {
        println!("no interactions (total {})", page.total_elements);
        return Ok(());
    }

    for item in &page.content {
        let kind = item
            .interaction_type
            .map(|kind| kind.as_str())
            .unwrap_or("-");
        let rating = item
            .customer_rating
            .map(|rating| rating.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{}  customer {}  product {}  {}  rating {}  {}  {}",
            item.id,
            item.customer_id,
            item.product_id,
            kind,
            rating,
            format_optional_timestamp(item.timestamp.as_ref()),
            truncate_for_table(item.message.as_deref(), MESSAGE_WIDTH)
        );
    }
    println!(
        "page {} ({} shown, {} total)",
        args.page,
        page.content.len(),
        page.total_elements
    );
    Ok(())
}
