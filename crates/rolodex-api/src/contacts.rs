//! Handlers for the contact endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/userdetails` | Body: any JSON object; 201 |
//! | `GET`    | `/getdetails` | Every record, store order |
//! | `DELETE` | `/deletedetail/{id}` | 404 if nothing matched |
//! | `PUT`    | `/updatedetail/{id}` | Body: the six content fields; 404 if nothing matched |

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use rolodex_core::{
  contact::{Contact, ContactUpdate, NewContact},
  id::ContactId,
  store::ContactStore,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{error::ApiError, state::StoreSlot};

pub const UPDATED_MESSAGE: &str = "Contact updated successfully";
pub const NOT_FOUND_MESSAGE: &str = "Contact not found";

// ─── Response body ────────────────────────────────────────────────────────────

/// Success envelope shared by all four endpoints.
#[derive(Debug, Serialize)]
pub struct Reply<T = ()> {
  pub success: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data:    Option<T>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<&'static str>,
}

impl Reply {
  pub fn ok() -> Self { Self { success: true, data: None, message: None } }

  pub fn with_message(message: &'static str) -> Self {
    Self { success: true, data: None, message: Some(message) }
  }
}

impl<T> Reply<T> {
  pub fn with_data(data: T) -> Self {
    Self { success: true, data: Some(data), message: None }
  }
}

fn parse_id(raw: &str) -> Result<ContactId, ApiError> { Ok(raw.parse()?) }

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /userdetails`: stores the body as-is plus `createdAt`.
pub async fn create<S>(
  State(slot): State<StoreSlot<S>>,
  body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore + 'static,
{
  let store = slot.get()?;
  let Json(fields) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

  let id = store
    .insert(NewContact::new(fields))
    .await
    .map_err(ApiError::store)?;
  tracing::debug!(%id, "contact created");

  Ok((StatusCode::CREATED, Json(Reply::ok())))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /getdetails`
pub async fn list<S>(
  State(slot): State<StoreSlot<S>>,
) -> Result<Json<Reply<Vec<Contact>>>, ApiError>
where
  S: ContactStore + 'static,
{
  let contacts = slot.get()?.list().await.map_err(ApiError::store)?;
  Ok(Json(Reply::with_data(contacts)))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /deletedetail/{id}`
pub async fn delete_one<S>(
  State(slot): State<StoreSlot<S>>,
  Path(raw_id): Path<String>,
) -> Result<Json<Reply>, ApiError>
where
  S: ContactStore + 'static,
{
  let store = slot.get()?;
  let id = parse_id(&raw_id)?;

  if !store.delete(id).await.map_err(ApiError::store)? {
    return Err(ApiError::NotFound(None));
  }
  tracing::debug!(%id, "contact deleted");
  Ok(Json(Reply::ok()))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /updatedetail/{id}`: replaces all six content fields; any of them
/// missing from the body is stored as `null`.
pub async fn update_one<S>(
  State(slot): State<StoreSlot<S>>,
  Path(raw_id): Path<String>,
  body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<Reply>, ApiError>
where
  S: ContactStore + 'static,
{
  let store = slot.get()?;
  let id = parse_id(&raw_id)?;
  let Json(fields) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
  let update = ContactUpdate::from_fields(&fields);

  if !store.update(id, update).await.map_err(ApiError::store)? {
    return Err(ApiError::NotFound(Some(NOT_FOUND_MESSAGE)));
  }
  tracing::debug!(%id, "contact updated");
  Ok(Json(Reply::with_message(UPDATED_MESSAGE)))
}
