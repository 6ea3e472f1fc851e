//! SQL schema for the Rolodex SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per contact document. The implicit rowid gives insertion order.
CREATE TABLE IF NOT EXISTS contacts (
    id          TEXT NOT NULL UNIQUE,   -- 24 hex chars, object-id layout
    created_at  TEXT NOT NULL,          -- ISO 8601 UTC; server-assigned
    body        TEXT NOT NULL CHECK (json_valid(body))
);

PRAGMA user_version = 1;
";
