//! Encoding and decoding helpers between Rust domain types and the integer
//! columns stored in SQLite.
//!
//! Timestamps are stored as epoch milliseconds. Verdicts are stored as small
//! integers: `1` safe, `0` unsafe, `-1` unknown (SMS only).

use chrono::{DateTime, Utc};
use warden_core::{HistoryKind, HistoryRecord, Sms, SmsVerdict, Url, UrlVerdict};

use crate::{Error, Result};

// ─── Kind → table mapping ────────────────────────────────────────────────────

/// A [`HistoryKind`] that knows how it is laid out in SQLite.
pub trait SqlKind: HistoryKind {
  /// Name of the single table in this kind's database.
  const TABLE: &'static str;
  /// Column holding the classified text.
  const PAYLOAD_COLUMN: &'static str;
  /// Database file name, relative to the data directory.
  const FILE_NAME: &'static str;

  fn encode_verdict(verdict: Self::Verdict) -> i64;

  fn decode_verdict(code: i64) -> Result<Self::Verdict>;
}

impl SqlKind for Sms {
  const TABLE: &'static str = "sms_history";
  const PAYLOAD_COLUMN: &'static str = "message";
  const FILE_NAME: &'static str = "sms_history.db";

  fn encode_verdict(verdict: SmsVerdict) -> i64 {
    match verdict {
      SmsVerdict::Safe => 1,
      SmsVerdict::Unsafe => 0,
      SmsVerdict::Unknown => -1,
    }
  }

  fn decode_verdict(code: i64) -> Result<SmsVerdict> {
    match code {
      1 => Ok(SmsVerdict::Safe),
      0 => Ok(SmsVerdict::Unsafe),
      -1 => Ok(SmsVerdict::Unknown),
      code => Err(Error::InvalidVerdict { kind: Self::NAME, code }),
    }
  }
}

impl SqlKind for Url {
  const TABLE: &'static str = "url_history";
  const PAYLOAD_COLUMN: &'static str = "url";
  const FILE_NAME: &'static str = "url_history.db";

  fn encode_verdict(verdict: UrlVerdict) -> i64 { i64::from(bool::from(verdict)) }

  fn decode_verdict(code: i64) -> Result<UrlVerdict> {
    match code {
      1 => Ok(UrlVerdict::Safe),
      0 => Ok(UrlVerdict::Unsafe),
      code => Err(Error::InvalidVerdict { kind: Self::NAME, code }),
    }
  }
}

// ─── Timestamps ──────────────────────────────────────────────────────────────

pub fn encode_millis(dt: DateTime<Utc>) -> i64 { dt.timestamp_millis() }

pub fn decode_millis(ms: i64) -> Result<DateTime<Utc>> {
  DateTime::from_timestamp_millis(ms).ok_or(Error::InvalidTimestamp(ms))
}

/// The current time, truncated to what the `timestamp` column can hold so
/// that a saved record compares equal to its reloaded self.
pub fn now_millis() -> Result<DateTime<Utc>> {
  decode_millis(encode_millis(Utc::now()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a history row.
pub struct RawRecord {
  pub id:        i64,
  pub payload:   String,
  pub is_safe:   i64,
  pub timestamp: i64,
}

impl RawRecord {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:        row.get(0)?,
      payload:   row.get(1)?,
      is_safe:   row.get(2)?,
      timestamp: row.get(3)?,
    })
  }

  pub fn into_record<K: SqlKind>(self) -> Result<HistoryRecord<K::Verdict>> {
    Ok(HistoryRecord {
      id:          self.id,
      payload:     self.payload,
      verdict:     K::decode_verdict(self.is_safe)?,
      observed_at: decode_millis(self.timestamp)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sms_codes_cover_tri_state() {
    for (verdict, code) in [
      (SmsVerdict::Safe, 1),
      (SmsVerdict::Unsafe, 0),
      (SmsVerdict::Unknown, -1),
    ] {
      assert_eq!(Sms::encode_verdict(verdict), code);
      assert_eq!(Sms::decode_verdict(code).unwrap(), verdict);
    }
  }

  #[test]
  fn url_safe_is_one() {
    assert_eq!(Url::encode_verdict(UrlVerdict::from(true)), 1);
    assert_eq!(Url::encode_verdict(UrlVerdict::from(false)), 0);
  }

  #[test]
  fn url_rejects_unknown_code() {
    let err = Url::decode_verdict(-1).unwrap_err();
    assert!(matches!(err, Error::InvalidVerdict { kind: "url", code: -1 }));
  }

  #[test]
  fn out_of_domain_codes_are_corruption() {
    assert!(Sms::decode_verdict(2).is_err());
    assert!(Sms::decode_verdict(-2).is_err());
    assert!(Url::decode_verdict(7).is_err());
  }

  #[test]
  fn now_survives_the_column() {
    let now = now_millis().unwrap();
    assert_eq!(decode_millis(encode_millis(now)).unwrap(), now);
  }

  #[test]
  fn absurd_timestamp_is_rejected() {
    assert!(matches!(decode_millis(i64::MAX), Err(Error::InvalidTimestamp(_))));
  }
}
