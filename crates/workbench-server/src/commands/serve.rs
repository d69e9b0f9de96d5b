use anyhow::{Context as _, Result};
use clap::Args;
use workbench_config::AppConfig;
use workbench_store::Store;

use crate::http::{self, AppState};

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind, overriding `server.host` from the config file
    #[arg(long)]
    pub host: Option<String>,
    /// Port to bind, overriding `server.port` from the config file
    #[arg(long)]
    pub port: Option<u16>,
}

pub fn serve(store: Store, config: &AppConfig, args: ServeArgs) -> Result<()> {
    let mut server = config.server.clone();
    if let Some(host) = args.host {
        server.host = host;
    }
    if let Some(port) = args.port {
        server.port = port;
    }
    let bind = server.bind();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .with_context(|| "start async runtime")?;
    runtime
        .block_on(http::serve(
            AppState::new(store),
            &bind,
            config.max_upload_bytes,
        ))
        .with_context(|| format!("serve on {bind}"))?;
    Ok(())
}
