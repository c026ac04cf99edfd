//! Shared storage layer for the clinic store.
//!
//! Layout:
//! - `schema.rs`: SQL DDL for initializing the store (SQLite-first)
//! - `sqlite.rs`: the process-wide pool handle
//! - `seed.rs`: first-run default rows

pub mod schema;
pub mod seed;
pub mod sqlite;

pub use schema::SQLITE_INIT;
pub use sqlite::{ClinicStorage, SqlitePool};
