//! History records — one persisted classification event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A classification result as stored in a history.
///
/// Records are created once, when a classification completes, and are never
/// modified afterwards. Both `id` and `observed_at` are assigned by the
/// store, not by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord<V> {
  /// Store-assigned key; strictly increasing in insertion order.
  pub id:          i64,
  /// Message body or URL that was classified.
  pub payload:     String,
  pub verdict:     V,
  /// Capture time, millisecond precision.
  pub observed_at: DateTime<Utc>,
}

/// Reject payloads that would violate the non-empty invariant.
pub fn check_payload(payload: &str) -> Result<()> {
  if payload.is_empty() {
    return Err(Error::EmptyPayload);
  }
  Ok(())
}
