//! warden server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), prepares one
//! SQLite history per kind under the data directory, and serves the JSON
//! history API over HTTP.
//!
//! Stores are opened on first request, not at startup.

mod settings;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use warden_core::{Sms, Url};
use warden_store_sqlite::StoreCell;

use crate::settings::ServerConfig;

#[derive(Parser)]
#[command(author, version, about = "Warden classification history server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let server_cfg = ServerConfig::load(&cli.config)?;

  let data_dir = server_cfg.data_dir();
  tokio::fs::create_dir_all(&data_dir)
    .await
    .with_context(|| format!("failed to create data directory {data_dir:?}"))?;

  let options = server_cfg.store_options();
  let sms = Arc::new(StoreCell::<Sms>::in_dir(&data_dir, options));
  let url = Arc::new(StoreCell::<Url>::in_dir(&data_dir, options));
  tracing::info!(
    data_dir = %data_dir.display(),
    upgrade_policy = ?options.upgrade,
    "history stores configured"
  );

  let app = warden_api::api_router(sms, url).layer(TraceLayer::new_for_http());
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(error = %e, "failed to listen for ctrl-c");
    std::future::pending::<()>().await;
  }
  tracing::info!("shutting down");
}
