//! HTTP server wiring for Rolodex.
//!
//! Combines the [`rolodex_api`] router with the cross-origin policy and
//! request tracing, and opens whichever store the configuration selects.

pub mod cors;
pub mod settings;

pub use cors::cors_layer;
pub use settings::{Backend, ServerConfig};

use std::path::{Path, PathBuf};

use axum::Router;
use rolodex_api::StoreSlot;
use rolodex_core::store::ContactStore;
use rolodex_store_mongo::MongoStore;
use rolodex_store_sqlite::SqliteStore;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// The full application: API routes, CORS, then request tracing outermost.
pub fn app<S>(slot: StoreSlot<S>, cors: CorsLayer) -> Router
where
  S: ContactStore + 'static,
{
  rolodex_api::api_router(slot)
    .layer(cors)
    .layer(TraceLayer::new_for_http())
}

// ─── Store startup ────────────────────────────────────────────────────────────

/// Connect to MongoDB. Logs and returns `None` when the connection settings
/// are missing or the server cannot be reached.
pub async fn connect_mongo(cfg: ServerConfig) -> Option<MongoStore> {
  let Some((uri, database)) = cfg.mongo_target() else {
    tracing::warn!("MONGO_URI or DB_NAME is not set; requests will get 503");
    return None;
  };

  match MongoStore::connect(uri, database).await {
    Ok(store) => {
      tracing::info!(database, "MongoDB connected successfully");
      Some(store)
    }
    Err(e) => {
      tracing::error!(error = %e, "MongoDB connection error");
      None
    }
  }
}

/// Open the SQLite store at the configured path. Logs and returns `None` on
/// failure.
pub async fn open_sqlite(cfg: ServerConfig) -> Option<SqliteStore> {
  let path = expand_tilde(&cfg.sqlite_path);
  match SqliteStore::open(&path).await {
    Ok(store) => {
      tracing::info!(path = %path.display(), "SQLite store opened");
      Some(store)
    }
    Err(e) => {
      tracing::error!(path = %path.display(), error = %e, "failed to open SQLite store");
      None
    }
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use tower::ServiceExt as _;

  use super::*;

  async fn ready_slot() -> StoreSlot<SqliteStore> {
    let store = SqliteStore::open_in_memory().await.unwrap();
    StoreSlot::ready(Arc::new(store))
  }

  fn preflight(origin: &str, method: &str) -> Request<Body> {
    Request::builder()
      .method("OPTIONS")
      .uri("/updatedetail/65a1f0c2b3d4e5f607182930")
      .header(header::ORIGIN, origin)
      .header(header::ACCESS_CONTROL_REQUEST_METHOD, method)
      .body(Body::empty())
      .unwrap()
  }

  #[tokio::test]
  async fn preflight_allows_any_origin_by_default() {
    let cors = cors_layer(None).unwrap();
    let resp = app(ready_slot().await, cors)
      .oneshot(preflight("http://example.com", "PUT"))
      .await
      .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let headers = resp.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    for verb in ["GET", "POST", "PUT", "DELETE"] {
      assert!(methods.contains(verb), "allow-methods: {methods}");
    }
  }

  #[tokio::test]
  async fn configured_origin_is_matched_exactly() {
    let cors = cors_layer(Some("http://localhost:5173/")).unwrap();
    let slot = ready_slot().await;

    let resp = app(slot.clone(), cors.clone())
      .oneshot(preflight("http://localhost:5173", "DELETE"))
      .await
      .unwrap();
    assert_eq!(
      resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
      "http://localhost:5173"
    );

    let resp = app(slot, cors)
      .oneshot(preflight("http://evil.example", "DELETE"))
      .await
      .unwrap();
    assert!(!resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
  }

  #[tokio::test]
  async fn app_serves_api_routes() {
    let cors = cors_layer(Some("*")).unwrap();
    let req = Request::builder()
      .uri("/getdetails")
      .header(header::ORIGIN, "http://example.com")
      .body(Body::empty())
      .unwrap();
    let resp = app(ready_slot().await, cors).oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, serde_json::json!({ "success": true, "data": [] }));
  }

  #[tokio::test]
  async fn missing_mongo_settings_leave_store_unset() {
    let cfg = ServerConfig::from_builder(config::Config::builder()).unwrap();
    assert!(connect_mongo(cfg).await.is_none());
  }

  #[test]
  fn tilde_expands_to_home() {
    let Ok(home) = std::env::var("HOME") else { return };
    assert_eq!(
      expand_tilde(Path::new("~/contacts.db")),
      PathBuf::from(home).join("contacts.db")
    );
    assert_eq!(
      expand_tilde(Path::new("/var/lib/rolodex.db")),
      PathBuf::from("/var/lib/rolodex.db")
    );
  }
}
