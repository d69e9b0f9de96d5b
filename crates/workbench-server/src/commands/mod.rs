use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};
use workbench_store::Store;

pub mod import;
pub mod search;
pub mod serve;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

pub struct Context<'a> {
    pub store: &'a Store,
    pub json: bool,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
