//! [`StoreSlot`]: the write-once holder for the shared store handle.
//!
//! The listener may start before the store has connected. Until the slot is
//! filled, handlers fail closed with [`ApiError::Unavailable`].

use std::sync::{Arc, OnceLock};

use crate::error::ApiError;

/// Shared, write-once reference to a store.
///
/// Clones observe the same slot, so the router's copy sees a store installed
/// later through any other clone.
pub struct StoreSlot<S> {
  inner: Arc<OnceLock<Arc<S>>>,
}

impl<S> StoreSlot<S> {
  /// A slot with no store yet.
  pub fn empty() -> Self { Self { inner: Arc::new(OnceLock::new()) } }

  /// A slot that is ready from the start.
  pub fn ready(store: Arc<S>) -> Self {
    let slot = Self::empty();
    slot.fill(store);
    slot
  }

  /// Install `store`. Returns `false` if a store was already installed; the
  /// first one stays.
  pub fn fill(&self, store: Arc<S>) -> bool { self.inner.set(store).is_ok() }

  pub fn is_ready(&self) -> bool { self.inner.get().is_some() }

  /// The installed store, or [`ApiError::Unavailable`].
  pub fn get(&self) -> Result<&S, ApiError> {
    self.inner.get().map(Arc::as_ref).ok_or(ApiError::Unavailable)
  }
}

impl<S> Clone for StoreSlot<S> {
  fn clone(&self) -> Self { Self { inner: Arc::clone(&self.inner) } }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fill_is_visible_through_clones_and_only_once() {
    let slot = StoreSlot::<u32>::empty();
    let observer = slot.clone();
    assert!(matches!(observer.get(), Err(ApiError::Unavailable)));

    assert!(slot.fill(Arc::new(1)));
    assert!(!slot.fill(Arc::new(2)));

    assert!(observer.is_ready());
    assert_eq!(*observer.get().unwrap(), 1);
  }
}
