use crate::commands::{print_json, Context};
use crate::service::InteractionService;
use anyhow::{Context as _, Result};
use clap::Args;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use workbench_core::IngestReportDto;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Comma-delimited file with a header row
    pub path: PathBuf,
}

pub fn import(ctx: &Context<'_>, args: ImportArgs) -> Result<()> {
    let file = File::open(&args.path)
        .with_context(|| format!("open {}", args.path.display()))?;
    let inserted = InteractionService::new(ctx.store)
        .ingest_from_text(BufReader::new(file))
        .with_context(|| format!("import {}", args.path.display()))?;

    if ctx.json {
        print_json(&IngestReportDto { inserted })?;
    } else {
        println!("imported {} interactions", inserted);
    }
    Ok(())
}
