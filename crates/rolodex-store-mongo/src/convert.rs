//! Conversions between domain types and BSON documents.

use chrono::{DateTime, Utc};
use mongodb::bson::{self, Bson, Document, doc, oid::ObjectId};
use rolodex_core::{
  contact::{CREATED_AT_KEY, Contact, ContactUpdate, ID_KEY, NewContact},
  id::ContactId,
};
use serde_json::{Map, Value};

use crate::{Error, Result};

// ─── Identifiers ──────────────────────────────────────────────────────────────

pub fn to_object_id(id: ContactId) -> ObjectId { ObjectId::from_bytes(id.bytes()) }

pub fn from_object_id(oid: ObjectId) -> ContactId { ContactId::from_bytes(oid.bytes()) }

pub fn id_filter(id: ContactId) -> Document {
  let mut filter = Document::new();
  filter.insert(ID_KEY, to_object_id(id));
  filter
}

// ─── Timestamps ───────────────────────────────────────────────────────────────

// BSON datetimes carry millisecond precision.
fn to_bson_dt(dt: DateTime<Utc>) -> bson::DateTime {
  bson::DateTime::from_millis(dt.timestamp_millis())
}

fn from_bson_dt(dt: bson::DateTime) -> Option<DateTime<Utc>> {
  DateTime::from_timestamp_millis(dt.timestamp_millis())
}

// ─── Writes ───────────────────────────────────────────────────────────────────

/// The document inserted for `contact`; `_id` is left for the driver.
pub fn encode_new_contact(contact: &NewContact) -> Result<Document> {
  let mut doc = bson::to_document(&contact.fields)?;
  doc.insert(CREATED_AT_KEY, to_bson_dt(contact.created_at));
  Ok(doc)
}

/// A `$set` covering all six content fields, nulls included.
pub fn encode_update(update: &ContactUpdate) -> Result<Document> {
  let mut set = Document::new();
  for (key, value) in update.fields() {
    set.insert(key, bson::to_bson(value)?);
  }
  Ok(doc! { "$set": set })
}

// ─── Reads ────────────────────────────────────────────────────────────────────

/// Split a stored document into its identifier, timestamp and remaining
/// fields. Non-JSON BSON values are rendered as relaxed extended JSON.
pub fn decode_contact(mut doc: Document) -> Result<Contact> {
  let id = match doc.remove(ID_KEY) {
    Some(Bson::ObjectId(oid)) => from_object_id(oid),
    other => return Err(Error::UnexpectedId(format!("{other:?}"))),
  };

  // A `createdAt` of any other type stays in `fields` untouched.
  let created_at = match doc.get(CREATED_AT_KEY) {
    Some(Bson::DateTime(dt)) => {
      let dt = from_bson_dt(*dt);
      doc.remove(CREATED_AT_KEY);
      dt
    }
    _ => None,
  };

  let fields: Map<String, Value> = doc
    .into_iter()
    .map(|(key, value)| (key, value.into_relaxed_extjson()))
    .collect();

  Ok(Contact { id, fields, created_at })
}

/// Decode a batch read from the collection. Documents that cannot be
/// decoded, such as ones whose `_id` is not an object id, are skipped so the
/// rest of the listing still comes back.
pub fn decode_contacts(docs: impl IntoIterator<Item = Document>) -> Vec<Contact> {
  docs
    .into_iter()
    .filter_map(|doc| match decode_contact(doc) {
      Ok(contact) => Some(contact),
      Err(error) => {
        tracing::warn!(%error, "skipping undecodable contact document");
        None
      }
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn object(value: Value) -> Map<String, Value> {
    match value {
      Value::Object(map) => map,
      other => panic!("expected object, got {other}"),
    }
  }

  #[test]
  fn object_id_and_contact_id_share_bytes() {
    let oid = ObjectId::new();
    let id = from_object_id(oid);
    assert_eq!(id.to_string(), oid.to_hex());
    assert_eq!(to_object_id(id), oid);
  }

  #[test]
  fn new_contact_gets_bson_timestamp() {
    let contact = NewContact::new(object(json!({ "Name": "Ana", "Age": 31 })));
    let doc = encode_new_contact(&contact).unwrap();

    assert_eq!(doc.get_str("Name").unwrap(), "Ana");
    assert!(matches!(doc.get("Age"), Some(Bson::Int32(31) | Bson::Int64(31))));
    assert_eq!(
      doc.get_datetime(CREATED_AT_KEY).unwrap().timestamp_millis(),
      contact.created_at.timestamp_millis()
    );
    assert!(doc.get(ID_KEY).is_none());
  }

  #[test]
  fn update_sets_all_six_fields() {
    let update = ContactUpdate { name: json!("Ana B."), ..Default::default() };
    let doc = encode_update(&update).unwrap();
    let set = doc.get_document("$set").unwrap();

    assert_eq!(set.len(), 6);
    assert_eq!(set.get_str("Name").unwrap(), "Ana B.");
    assert_eq!(set.get("Email"), Some(&Bson::Null));
    assert!(set.get(CREATED_AT_KEY).is_none());
  }

  #[test]
  fn decode_splits_id_and_timestamp() {
    let oid = ObjectId::new();
    let millis = 1_704_164_645_000;
    let doc = doc! {
      "_id": oid,
      "Name": "Ana",
      "createdAt": bson::DateTime::from_millis(millis),
    };

    let contact = decode_contact(doc).unwrap();
    assert_eq!(contact.id, from_object_id(oid));
    assert_eq!(contact.created_at.unwrap().timestamp_millis(), millis);
    assert_eq!(contact.fields, object(json!({ "Name": "Ana" })));
  }

  #[test]
  fn decode_keeps_foreign_created_at() {
    let doc = doc! { "_id": ObjectId::new(), "createdAt": "yesterday" };
    let contact = decode_contact(doc).unwrap();
    assert!(contact.created_at.is_none());
    assert_eq!(contact.fields["createdAt"], "yesterday");
  }

  #[test]
  fn decode_rejects_string_id() {
    let doc = doc! { "_id": "abc", "Name": "Ana" };
    assert!(matches!(decode_contact(doc), Err(Error::UnexpectedId(_))));
  }

  #[test]
  fn decode_batch_skips_foreign_ids() {
    let first = ObjectId::new();
    let last = ObjectId::new();
    let docs = vec![
      doc! { "_id": first, "Name": "Ana" },
      doc! { "_id": "client-chosen", "Name": "Bo" },
      doc! { "_id": 7, "Name": "Cy" },
      doc! { "_id": last, "Name": "Di" },
    ];

    let contacts = decode_contacts(docs);
    let ids: Vec<_> = contacts.iter().map(|c| c.id).collect();
    assert_eq!(ids, [from_object_id(first), from_object_id(last)]);
    assert_eq!(contacts[1].fields["Name"], "Di");
  }
}
