//! SQLite backend for Warden classification histories.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. Each history kind lives in its own
//! database file holding a single table.

mod cell;
mod db;
mod encode;
mod repo;
mod schema;

pub mod error;

pub use cell::StoreCell;
pub use db::HistoryDb;
pub use encode::SqlKind;
pub use error::{Error, Result};
pub use repo::SqliteHistory;
pub use schema::{SCHEMA_VERSION, StoreOptions, UpgradePolicy};
