//! [`ContactId`]: the store-assigned identity of a contact record.
//!
//! The layout is the 12-byte document-store object id: a 4-byte big-endian
//! creation timestamp (seconds), 5 process-unique bytes, and a 3-byte
//! counter. Its canonical text form is 24 lowercase hex characters.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::Error;

/// Opaque, globally unique identifier of a stored contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId([u8; 12]);

impl ContactId {
  pub const fn from_bytes(bytes: [u8; 12]) -> Self { Self(bytes) }

  pub const fn bytes(&self) -> [u8; 12] { self.0 }

  /// Seconds since the Unix epoch encoded in the leading four bytes.
  pub fn timestamp_secs(&self) -> u32 {
    u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
  }
}

impl fmt::Display for ContactId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&hex::encode(self.0))
  }
}

impl FromStr for ContactId {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let mut bytes = [0u8; 12];
    hex::decode_to_slice(s, &mut bytes).map_err(|source| Error::InvalidId {
      input: s.to_owned(),
      source,
    })?;
    Ok(Self(bytes))
  }
}

impl Serialize for ContactId {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for ContactId {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(de::Error::custom)
  }
}
