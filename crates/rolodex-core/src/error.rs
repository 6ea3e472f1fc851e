//! Error types for `rolodex-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid contact id {input:?}: {source}")]
  InvalidId {
    input:  String,
    #[source]
    source: hex::FromHexError,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
