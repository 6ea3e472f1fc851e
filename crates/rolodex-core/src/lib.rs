//! Core types and trait definitions for the Rolodex contact service.
//!
//! Free of HTTP and database dependencies. Every other crate depends on it.

pub mod contact;
pub mod error;
pub mod id;
pub mod store;

pub use error::{Error, Result};
