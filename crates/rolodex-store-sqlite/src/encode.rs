//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, identifiers as lowercase hex,
//! and documents as compact JSON objects.

use std::sync::{
  LazyLock,
  atomic::{AtomicU32, Ordering},
};

use chrono::{DateTime, Utc};
use rand_core::{OsRng, RngCore as _};
use rolodex_core::{contact::Contact, id::ContactId};
use serde_json::{Map, Value};

use crate::{Error, Result};

// ─── ContactId ────────────────────────────────────────────────────────────────

pub fn encode_id(id: ContactId) -> String { id.to_string() }

pub fn decode_id(s: &str) -> Result<ContactId> { Ok(s.parse()?) }

/// Mint a fresh identifier in object-id layout.
///
/// Seconds timestamp, then five random bytes fixed for the life of the
/// process, then the low three bytes of a counter seeded randomly.
pub fn generate_id() -> ContactId {
  static PROCESS_UNIQUE: LazyLock<[u8; 5]> = LazyLock::new(|| {
    let mut bytes = [0u8; 5];
    OsRng.fill_bytes(&mut bytes);
    bytes
  });
  static COUNTER: LazyLock<AtomicU32> =
    LazyLock::new(|| AtomicU32::new(OsRng.next_u32()));

  let secs  = u32::try_from(Utc::now().timestamp()).unwrap_or(u32::MAX);
  let count = COUNTER.fetch_add(1, Ordering::Relaxed).to_be_bytes();

  let mut bytes = [0u8; 12];
  bytes[..4].copy_from_slice(&secs.to_be_bytes());
  bytes[4..9].copy_from_slice(&*PROCESS_UNIQUE);
  bytes[9..].copy_from_slice(&count[1..]);
  ContactId::from_bytes(bytes)
}

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Documents ────────────────────────────────────────────────────────────────

pub fn encode_body(fields: &Map<String, Value>) -> Result<String> {
  Ok(serde_json::to_string(fields)?)
}

pub fn decode_body(id: &str, s: &str) -> Result<Map<String, Value>> {
  match serde_json::from_str(s)? {
    Value::Object(map) => Ok(map),
    _ => Err(Error::NotAnObject(id.to_owned())),
  }
}

/// Encode a single field value for `json_set(.., json(?))`.
pub fn encode_value(value: &Value) -> Result<String> {
  Ok(serde_json::to_string(value)?)
}

/// Raw strings read directly from a `contacts` row.
pub struct RawContact {
  pub id:         String,
  pub created_at: String,
  pub body:       String,
}

impl RawContact {
  pub fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      id:         decode_id(&self.id)?,
      fields:     decode_body(&self.id, &self.body)?,
      created_at: Some(decode_dt(&self.created_at)?),
    })
  }
}
