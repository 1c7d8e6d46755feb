use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{HttpBackend, SessionDriver};
use tokio_stream::wrappers::UnboundedReceiverStream;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod terminal;

use config::{load_settings, DEFAULT_CONFIG_FILE};

#[derive(Parser, Debug)]
#[command(name = "speedrabble", about = "Spell words from letter tiles against the clock")]
struct Args {
    /// Game server base url, e.g. http://localhost:8080
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(log_file: &Path) -> Result<()> {
    let file = File::create(log_file)
        .with_context(|| format!("failed to create log file '{}'", log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(&args.config);
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = log_file;
    }
    init_tracing(&settings.log_file)?;
    info!(server_url = %settings.server_url, "starting speedrabble");

    let backend = HttpBackend::new(&settings.server_url)
        .with_context(|| format!("invalid server url '{}'", settings.server_url))?;
    let driver = SessionDriver::new(Arc::new(backend), settings.rules());

    let session = {
        let _guard = terminal::TerminalGuard::enter().context("failed to prepare terminal")?;
        let keys = UnboundedReceiverStream::new(terminal::spawn_key_reader());
        driver
            .run(keys, |state| {
                if let Err(error) = terminal::draw(state) {
                    warn!(%error, "terminal: failed to draw frame");
                }
            })
            .await
    };

    println!("Final score: {} pts", session.points());
    Ok(())
}
