//! The `ContactStore` trait.
//!
//! The trait is implemented by storage backends (`rolodex-store-mongo`,
//! `rolodex-store-sqlite`). The HTTP layer depends on this abstraction, not on
//! any concrete backend.

use std::future::Future;

use crate::{
  contact::{Contact, ContactUpdate, NewContact},
  id::ContactId,
};

/// Abstraction over one collection of contact documents.
///
/// Every method is a single round trip to the backing store. Implementations
/// hold no per-request state and must be shareable across concurrent
/// requests.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new document and return the identifier the store assigned.
  fn insert(
    &self,
    contact: NewContact,
  ) -> impl Future<Output = Result<ContactId, Self::Error>> + Send + '_;

  /// Every document in the collection, unfiltered, in store order.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Remove the document with `id`. Returns `false` if nothing matched.
  fn delete(
    &self,
    id: ContactId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Overwrite the six content fields of the document with `id`, leaving its
  /// identifier and `createdAt` untouched. Returns `false` if nothing matched.
  fn update(
    &self,
    id: ContactId,
    update: ContactUpdate,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
