//! Verdicts — the outcome of a safety classification.
//!
//! Each history kind has its own verdict type. How a verdict is laid out on
//! disk is the storage backend's business; here it is just an enum.

use std::fmt;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Common bound for every verdict type.
pub trait Verdict:
  Copy + Eq + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
  /// `Some(true)` for safe, `Some(false)` for unsafe, `None` when the
  /// classifier could not reach a decision.
  fn is_safe(self) -> Option<bool>;
}

/// Classification of an SMS message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmsVerdict {
  Safe,
  Unsafe,
  /// The classifier was unreachable (typically: no connection).
  Unknown,
}

impl Verdict for SmsVerdict {
  fn is_safe(self) -> Option<bool> {
    match self {
      Self::Safe => Some(true),
      Self::Unsafe => Some(false),
      Self::Unknown => None,
    }
  }
}

/// Classification of a URL. URL checks always produce a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlVerdict {
  Safe,
  Unsafe,
}

impl Verdict for UrlVerdict {
  fn is_safe(self) -> Option<bool> { Some(self == Self::Safe) }
}

impl From<bool> for UrlVerdict {
  fn from(safe: bool) -> Self { if safe { Self::Safe } else { Self::Unsafe } }
}

impl From<UrlVerdict> for bool {
  fn from(v: UrlVerdict) -> Self { v == UrlVerdict::Safe }
}
