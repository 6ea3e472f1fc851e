//! MongoDB backend for the Rolodex contact store.
//!
//! All contacts live in one collection, [`COLLECTION`]. Identity is the
//! driver-assigned `ObjectId`; `createdAt` is stored as a BSON datetime.

mod convert;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::{COLLECTION, MongoStore};
