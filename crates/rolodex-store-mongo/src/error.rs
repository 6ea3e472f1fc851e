//! Error type for `rolodex-store-mongo`.

use mongodb::bson;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("{0}")]
  Mongo(#[from] mongodb::error::Error),

  #[error("bson encoding error: {0}")]
  Bson(#[from] bson::ser::Error),

  /// A document's `_id` was missing or not an `ObjectId`.
  #[error("unexpected document id: {0}")]
  UnexpectedId(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
