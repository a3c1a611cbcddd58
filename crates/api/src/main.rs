#![forbid(unsafe_code)]

use anyhow::Context;
use bk_api::{AppState, router};
use bk_storage::SqliteStore;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Boardkit ordering service: dense column/task positions behind a small
/// JSON contract.
#[derive(Parser, Debug)]
#[command(name = "bk_api", version, about)]
struct Args {
    /// Directory holding the SQLite database.
    #[arg(long, default_value = "./boardkit-data")]
    storage_dir: PathBuf,

    /// Address to bind the HTTP listener on.
    #[arg(long, default_value = "127.0.0.1:7171")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = SqliteStore::open(&args.storage_dir)
        .with_context(|| format!("open store at {}", args.storage_dir.display()))?;
    tracing::info!(storage_dir = %args.storage_dir.display(), "store opened");

    let app = router(AppState::new(store));
    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .with_context(|| format!("bind {}", args.listen))?;
    tracing::info!(listen = %args.listen, "serving requests");
    axum::serve(listener, app).await?;
    Ok(())
}
