//! [`SqliteStore`]: the SQLite implementation of [`ContactStore`].

use std::path::Path;

use rolodex_core::{
  contact::{Contact, ContactUpdate, NewContact},
  id::ContactId,
  store::ContactStore,
};

use crate::{
  Error, Result,
  encode::{RawContact, encode_body, encode_dt, encode_id, encode_value, generate_id},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A contact collection backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = Error;

  async fn insert(&self, contact: NewContact) -> Result<ContactId> {
    let id = generate_id();

    let id_str   = encode_id(id);
    let at_str   = encode_dt(contact.created_at);
    let body_str = encode_body(&contact.fields)?;

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contacts (id, created_at, body) VALUES (?1, ?2, ?3)",
          rusqlite::params![id_str, at_str, body_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(id)
  }

  async fn list(&self) -> Result<Vec<Contact>> {
    let raws: Vec<RawContact> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, created_at, body FROM contacts ORDER BY rowid",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawContact {
              id:         row.get(0)?,
              created_at: row.get(1)?,
              body:       row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }

  async fn delete(&self, id: ContactId) -> Result<bool> {
    let id_str = encode_id(id);

    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM contacts WHERE id = ?1",
          rusqlite::params![id_str],
        )?)
      })
      .await?;

    Ok(removed > 0)
  }

  async fn update(&self, id: ContactId, update: ContactUpdate) -> Result<bool> {
    let id_str = encode_id(id);
    let [name, email, contact, company, address, notes] = update
      .fields()
      .map(|(_, value)| encode_value(value));
    let (name, email, contact, company, address, notes) =
      (name?, email?, contact?, company?, address?, notes?);

    // One statement, so the six fields land together or not at all.
    let matched = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE contacts
           SET body = json_set(
             body,
             '$.Name',    json(?2),
             '$.Email',   json(?3),
             '$.Contact', json(?4),
             '$.Company', json(?5),
             '$.Address', json(?6),
             '$.Notes',   json(?7)
           )
           WHERE id = ?1",
          rusqlite::params![id_str, name, email, contact, company, address, notes],
        )?)
      })
      .await?;

    Ok(matched > 0)
  }
}
