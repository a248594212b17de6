//! Core types and trait definitions for the Warden history store.
//!
//! This crate is deliberately free of HTTP and database dependencies. It
//! describes what a classification history *is*; the storage and transport
//! crates decide where it lives and how it travels.

// Native `async fn` in traits; implementors spell out `Send` futures.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod kind;
pub mod record;
pub mod repo;
pub mod verdict;

pub use error::{Error, Result};
pub use kind::{HistoryKind, Sms, Url};
pub use record::HistoryRecord;
pub use repo::{HistoryRepository, RecordOf};
pub use verdict::{SmsVerdict, UrlVerdict, Verdict};

#[cfg(test)]
mod tests;
