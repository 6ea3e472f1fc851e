//! JSON REST API for Rolodex.
//!
//! Exposes an axum [`Router`] backed by any [`rolodex_core::store::ContactStore`].
//! CORS, tracing, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let slot = StoreSlot::ready(Arc::new(store));
//! let app = rolodex_api::api_router(slot).layer(cors);
//! ```

pub mod contacts;
pub mod error;
pub mod state;

use axum::{
  Router,
  routing::{delete, get, post, put},
};
use rolodex_core::store::ContactStore;

pub use error::ApiError;
pub use state::StoreSlot;

/// Build a fully-materialised API router over the store in `slot`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(slot: StoreSlot<S>) -> Router<()>
where
  S: ContactStore + 'static,
{
  Router::new()
    .route("/userdetails", post(contacts::create::<S>))
    .route("/getdetails", get(contacts::list::<S>))
    .route("/deletedetail/{id}", delete(contacts::delete_one::<S>))
    .route("/updatedetail/{id}", put(contacts::update_one::<S>))
    .with_state(slot)
}

// ─── Integration tests ────────────────────────────────────────────────────────
