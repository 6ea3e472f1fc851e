//! Contact records and the inputs that create and replace them.
//!
//! A contact is a schemaless JSON document. Six content fields carry the
//! conventional meaning (`Name`, `Email`, `Contact`, `Company`, `Address`,
//! `Notes`) and are the only ones the update operation touches. Everything
//! else supplied at creation is stored as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::id::ContactId;

/// Document key holding the store-assigned identifier.
pub const ID_KEY: &str = "_id";
/// Document key holding the server-assigned creation timestamp.
pub const CREATED_AT_KEY: &str = "createdAt";

/// The content fields replaced by [`ContactUpdate`], in document order.
pub const CONTENT_FIELDS: [&str; 6] =
  ["Name", "Email", "Contact", "Company", "Address", "Notes"];

// ─── Stored record ───────────────────────────────────────────────────────────

/// A contact as read back from the store.
///
/// Serialises as a flat JSON object: `_id`, every stored field, then
/// `createdAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
  #[serde(rename = "_id")]
  pub id:         ContactId,
  #[serde(flatten)]
  pub fields:     Map<String, Value>,
  /// `None` only for documents written by something other than this service.
  #[serde(
    rename = "createdAt",
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub created_at: Option<DateTime<Utc>>,
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// Input to [`ContactStore::insert`](crate::store::ContactStore::insert).
#[derive(Debug, Clone, PartialEq)]
pub struct NewContact {
  pub fields:     Map<String, Value>,
  pub created_at: DateTime<Utc>,
}

impl NewContact {
  /// Wrap a client-supplied document, stamping `created_at` with the current
  /// time.
  ///
  /// Any `_id` in `fields` is dropped because identity belongs to the store,
  /// and any `createdAt` is dropped because the server timestamp wins.
  pub fn new(mut fields: Map<String, Value>) -> Self {
    fields.remove(ID_KEY);
    fields.remove(CREATED_AT_KEY);
    Self { fields, created_at: Utc::now() }
  }
}

// ─── Update ──────────────────────────────────────────────────────────────────

/// Full replacement of the six content fields.
///
/// A key missing from the request body becomes [`Value::Null`], which
/// overwrites whatever was stored: this is replacement, not a patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactUpdate {
  #[serde(rename = "Name", default)]
  pub name:    Value,
  #[serde(rename = "Email", default)]
  pub email:   Value,
  #[serde(rename = "Contact", default)]
  pub contact: Value,
  #[serde(rename = "Company", default)]
  pub company: Value,
  #[serde(rename = "Address", default)]
  pub address: Value,
  #[serde(rename = "Notes", default)]
  pub notes:   Value,
}

impl ContactUpdate {
  /// Pick the six content fields out of a request body by key. Every other
  /// key is ignored.
  pub fn from_fields(fields: &Map<String, Value>) -> Self {
    let take = |key: &str| fields.get(key).cloned().unwrap_or(Value::Null);
    Self {
      name:    take(CONTENT_FIELDS[0]),
      email:   take(CONTENT_FIELDS[1]),
      contact: take(CONTENT_FIELDS[2]),
      company: take(CONTENT_FIELDS[3]),
      address: take(CONTENT_FIELDS[4]),
      notes:   take(CONTENT_FIELDS[5]),
    }
  }

  /// `(key, value)` pairs in [`CONTENT_FIELDS`] order.
  pub fn fields(&self) -> [(&'static str, &Value); 6] {
    [
      (CONTENT_FIELDS[0], &self.name),
      (CONTENT_FIELDS[1], &self.email),
      (CONTENT_FIELDS[2], &self.contact),
      (CONTENT_FIELDS[3], &self.company),
      (CONTENT_FIELDS[4], &self.address),
      (CONTENT_FIELDS[5], &self.notes),
    ]
  }
}
