//! rolodex server binary.
//!
//! Loads `.env`, reads `rolodex.toml` (or the path given with `--config`)
//! overlaid by the environment, starts listening, and connects the configured
//! store in the background. Requests that arrive before the store is ready
//! get 503.

use std::{future::Future, path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use rolodex_api::StoreSlot;
use rolodex_core::store::ContactStore;
use rolodex_server::{Backend, ServerConfig, app, connect_mongo, cors_layer, open_sqlite};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Rolodex contact service")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "rolodex.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // `.env` first so it can set `RUST_LOG`.
  let dotenv = dotenvy::dotenv();

  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  match dotenv {
    Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
    Err(e) if e.not_found() => {}
    Err(e) => return Err(e).context("failed to read .env"),
  }

  let cli = Cli::parse();

  let cfg = ServerConfig::load(&cli.config)
    .context("failed to load configuration")?;
  let cors = cors_layer(cfg.frontend_url.as_deref())
    .context("FRONTEND_URL is not a valid origin")?;

  let address = cfg.address();
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;
  tracing::info!("Server running on http://{address}");

  match cfg.backend {
    Backend::Mongo => serve(listener, cors, connect_mongo(cfg)).await,
    Backend::Sqlite => serve(listener, cors, open_sqlite(cfg)).await,
  }
}

/// Serve immediately; install the store into the router's slot once `connect`
/// yields one.
async fn serve<S, F>(
  listener: TcpListener,
  cors:     CorsLayer,
  connect:  F,
) -> anyhow::Result<()>
where
  S: ContactStore + 'static,
  F: Future<Output = Option<S>> + Send + 'static,
{
  let slot = StoreSlot::empty();
  let installer = slot.clone();
  tokio::spawn(async move {
    if let Some(store) = connect.await {
      installer.fill(Arc::new(store));
    }
  });

  axum::serve(listener, app(slot, cors))
    .await
    .context("server error")
}
