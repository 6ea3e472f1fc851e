//! [`MongoStore`]: the MongoDB implementation of [`ContactStore`].

use futures::TryStreamExt as _;
use mongodb::{
  Client, Collection, Database,
  bson::{Bson, Document, doc},
};
use rolodex_core::{
  contact::{Contact, ContactUpdate, NewContact},
  id::ContactId,
  store::ContactStore,
};

use crate::{
  Error, Result,
  convert::{decode_contacts, encode_new_contact, encode_update, from_object_id, id_filter},
};

/// Name of the collection holding every contact document.
pub const COLLECTION: &str = "UserDetails";

/// A contact collection in a MongoDB database.
///
/// Cloning is cheap; the driver's client and its connection pool are
/// reference-counted.
#[derive(Clone, Debug)]
pub struct MongoStore {
  collection: Collection<Document>,
}

impl MongoStore {
  /// Connect to `uri`, select `database`, and ping the deployment so an
  /// unreachable server is reported now rather than on the first request.
  pub async fn connect(uri: &str, database: &str) -> Result<Self> {
    let client = Client::with_uri_str(uri).await?;
    let db = client.database(database);
    db.run_command(doc! { "ping": 1 }).await?;
    tracing::debug!(database, collection = COLLECTION, "mongodb ping succeeded");
    Ok(Self::from_database(&db))
  }

  /// Use [`COLLECTION`] in an already-configured database handle.
  pub fn from_database(db: &Database) -> Self {
    Self { collection: db.collection(COLLECTION) }
  }
}

impl ContactStore for MongoStore {
  type Error = Error;

  async fn insert(&self, contact: NewContact) -> Result<ContactId> {
    let doc = encode_new_contact(&contact)?;
    let result = self.collection.insert_one(doc).await?;
    match result.inserted_id {
      Bson::ObjectId(oid) => Ok(from_object_id(oid)),
      other => Err(Error::UnexpectedId(other.to_string())),
    }
  }

  async fn list(&self) -> Result<Vec<Contact>> {
    let docs: Vec<Document> = self
      .collection
      .find(doc! {})
      .await?
      .try_collect()
      .await?;
    Ok(decode_contacts(docs))
  }

  async fn delete(&self, id: ContactId) -> Result<bool> {
    let result = self.collection.delete_one(id_filter(id)).await?;
    Ok(result.deleted_count > 0)
  }

  async fn update(&self, id: ContactId, update: ContactUpdate) -> Result<bool> {
    let result = self
      .collection
      .update_one(id_filter(id), encode_update(&update)?)
      .await?;
    Ok(result.matched_count > 0)
  }
}
