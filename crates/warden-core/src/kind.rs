//! History kinds — the type-level switch between SMS and URL history.
//!
//! Everything that differs between the two histories hangs off a zero-sized
//! marker type, so a single generic repository serves both.

use std::fmt;

use crate::verdict::{SmsVerdict, UrlVerdict, Verdict};

/// A family of history records sharing one verdict type and one store.
pub trait HistoryKind: fmt::Debug + Send + Sync + 'static {
  type Verdict: Verdict;

  /// Short lowercase name, used in logs and routes.
  const NAME: &'static str;

  /// Number of records returned by
  /// [`HistoryRepository::recent_default`](crate::HistoryRepository::recent_default).
  const DEFAULT_LIMIT: usize;
}

/// SMS message history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sms;

impl HistoryKind for Sms {
  type Verdict = SmsVerdict;

  const NAME: &'static str = "sms";
  const DEFAULT_LIMIT: usize = 10;
}

/// URL check history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Url;

impl HistoryKind for Url {
  type Verdict = UrlVerdict;

  const NAME: &'static str = "url";
  const DEFAULT_LIMIT: usize = 12;
}
