//! SQL schema for the intake SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `PRAGMA user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Enquiries are strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS enquiries (
    enquiry_id   TEXT PRIMARY KEY,
    full_name    TEXT NOT NULL,
    phone        TEXT NOT NULL,
    email        TEXT NOT NULL,
    service      TEXT NOT NULL,   -- wire discriminant of the Service variant
    country      TEXT NOT NULL,
    message      TEXT NOT NULL,
    submitted_at TEXT NOT NULL    -- ISO 8601 UTC; server-assigned
);

-- Subscriber addresses, stored verbatim. Duplicates are legal; the implicit
-- rowid preserves insertion order.
CREATE TABLE IF NOT EXISTS subscribers (
    email TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS enquiries_submitted_idx ON enquiries(submitted_at);

PRAGMA user_version = 1;
";
