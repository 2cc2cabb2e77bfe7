//! SQL schema for the trivia SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS categories (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    type  TEXT NOT NULL
);

-- `category` is deliberately not a foreign key: referential integrity is a
-- policy of the caller.
-- AUTOINCREMENT keeps deleted ids from being handed out again.
CREATE TABLE IF NOT EXISTS questions (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    question    TEXT    NOT NULL,
    answer      TEXT    NOT NULL,
    category    INTEGER NOT NULL,
    difficulty  INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS questions_category_idx ON questions(category);

PRAGMA user_version = 1;
";
