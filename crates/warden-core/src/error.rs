//! Error types for `warden-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("history payload must not be empty")]
  EmptyPayload,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
