//! Error type for `warden-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] warden_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// The file was written by a newer schema than the one requested.
  #[error("schema version {found} is newer than supported version {expected}")]
  SchemaDowngrade { found: u32, expected: u32 },

  /// A stored verdict code fell outside the domain of its kind.
  #[error("invalid {kind} verdict code: {code}")]
  InvalidVerdict { kind: &'static str, code: i64 },

  #[error("timestamp out of range: {0} ms")]
  InvalidTimestamp(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
