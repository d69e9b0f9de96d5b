mod commands;
mod error;
mod http;
mod service;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{import, search, serve, Context};
use crate::error::{exit_code_for, report_error};
use workbench_config::{self as config, AppConfig};
use workbench_store::{paths, Store};

#[derive(Debug, Parser)]
#[command(
    name = "workbench",
    version,
    about = "Customer interaction ingest and search service"
)]
struct Cli {
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP service
    Serve(serve::ServeArgs),
    /// Ingest a delimited file into the store
    Import(import::ImportArgs),
    /// Search stored interactions
    Search(search::SearchArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose, matches!(cli.command, Command::Serve(_)));
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        db_path,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let store = open_store(db_path, &app_config)?;

    match command {
        Command::Serve(args) => serve::serve(store, &app_config, args),
        Command::Import(args) => import::import(
            &Context {
                store: &store,
                json,
            },
            args,
        ),
        Command::Search(args) => search::search(
            &Context {
                store: &store,
                json,
            },
            args,
        ),
    }
}

fn open_store(db_path: Option<PathBuf>, app_config: &AppConfig) -> Result<Store> {
    let requested = db_path.or_else(|| app_config.database_path.clone());
    let db_path = paths::resolve_db_path(requested).with_context(|| "resolve database path")?;
    debug!(path = %db_path.display(), "database path resolved");

    let store = Store::open(&db_path)
        .with_context(|| format!("open database {}", db_path.display()))?;
    store.migrate().with_context(|| "run migrations")?;
    Ok(store)
}

fn init_logging(verbose: bool, serving: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = match (verbose, serving) {
        (true, _) => "debug",
        (false, true) => "info",
        (false, false) => "warn",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
