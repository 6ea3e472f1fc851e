//! Runtime server configuration.
//!
//! Layered lowest to highest: built-in defaults, an optional TOML file, then
//! the process environment (`MONGO_URI`, `DB_NAME`, `FRONTEND_URL`, `PORT`,
//! `HOST`, `BACKEND`, `SQLITE_PATH`).

use std::path::{Path, PathBuf};

use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;

/// Which [`ContactStore`](rolodex_core::store::ContactStore) backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
  Mongo,
  Sqlite,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host:         String,
  pub port:         u16,
  pub backend:      Backend,
  pub mongo_uri:    Option<String>,
  pub db_name:      Option<String>,
  /// Allowed CORS origin; unset or `*` allows any.
  pub frontend_url: Option<String>,
  pub sqlite_path:  PathBuf,
}

impl ServerConfig {
  /// Read `path` if it exists, then overlay the environment.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Self::from_builder(
      Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(Environment::default()),
    )
  }

  /// Apply defaults beneath whatever sources `builder` already carries.
  pub fn from_builder(
    builder: ConfigBuilder<DefaultState>,
  ) -> Result<Self, ConfigError> {
    builder
      .set_default("host", "0.0.0.0")?
      .set_default("port", 3001)?
      .set_default("backend", "mongo")?
      .set_default("sqlite_path", "rolodex.db")?
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// Connection string and database name, if both are set and non-empty.
  pub fn mongo_target(&self) -> Option<(&str, &str)> {
    let uri = self.mongo_uri.as_deref().filter(|s| !s.is_empty())?;
    let db  = self.db_name.as_deref().filter(|s| !s.is_empty())?;
    Some((uri, db))
  }
}

#[cfg(test)]
mod tests {
  use config::FileFormat;

  use super::*;

  fn from_toml(toml: &str) -> ServerConfig {
    ServerConfig::from_builder(
      Config::builder().add_source(File::from_str(toml, FileFormat::Toml)),
    )
    .unwrap()
  }

  #[test]
  fn defaults_apply_when_nothing_is_set() {
    let cfg = from_toml("");
    assert_eq!(cfg.address(), "0.0.0.0:3001");
    assert_eq!(cfg.backend, Backend::Mongo);
    assert_eq!(cfg.sqlite_path, PathBuf::from("rolodex.db"));
    assert!(cfg.frontend_url.is_none());
    assert!(cfg.mongo_target().is_none());
  }

  #[test]
  fn file_values_override_defaults() {
    let cfg = from_toml(
      r#"
        port = 8080
        backend = "sqlite"
        mongo_uri = "mongodb://localhost:27017"
        db_name = "contacts"
        frontend_url = "http://localhost:5173"
      "#,
    );
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend, Backend::Sqlite);
    assert_eq!(
      cfg.mongo_target(),
      Some(("mongodb://localhost:27017", "contacts"))
    );
    assert_eq!(cfg.frontend_url.as_deref(), Some("http://localhost:5173"));
  }

  #[test]
  fn mongo_target_requires_both_values() {
    let cfg = from_toml(r#"mongo_uri = "mongodb://localhost""#);
    assert!(cfg.mongo_target().is_none());

    let cfg = from_toml("mongo_uri = \"mongodb://localhost\"\ndb_name = \"\"");
    assert!(cfg.mongo_target().is_none());
  }
}
