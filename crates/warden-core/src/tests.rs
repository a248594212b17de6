//! Unit tests for the core types.

use crate::{
  HistoryKind, Sms, SmsVerdict, Url, UrlVerdict, Verdict,
  error::Error,
  record::check_payload,
};

// ─── Verdicts ────────────────────────────────────────────────────────────────

#[test]
fn sms_verdict_is_tri_state() {
  assert_eq!(SmsVerdict::Safe.is_safe(), Some(true));
  assert_eq!(SmsVerdict::Unsafe.is_safe(), Some(false));
  assert_eq!(SmsVerdict::Unknown.is_safe(), None);
}

#[test]
fn url_verdict_converts_from_and_to_bool() {
  assert_eq!(UrlVerdict::from(true), UrlVerdict::Safe);
  assert_eq!(UrlVerdict::from(false), UrlVerdict::Unsafe);
  assert!(bool::from(UrlVerdict::Safe));
  assert!(!bool::from(UrlVerdict::Unsafe));
  assert_eq!(UrlVerdict::Unsafe.is_safe(), Some(false));
}

#[test]
fn verdicts_serialize_lowercase() {
  assert_eq!(serde_json::to_string(&SmsVerdict::Unknown).unwrap(), "\"unknown\"");
  assert_eq!(serde_json::to_string(&UrlVerdict::Safe).unwrap(), "\"safe\"");

  let v: SmsVerdict = serde_json::from_str("\"unsafe\"").unwrap();
  assert_eq!(v, SmsVerdict::Unsafe);
}

#[test]
fn url_verdict_rejects_unknown() {
  assert!(serde_json::from_str::<UrlVerdict>("\"unknown\"").is_err());
}

// ─── Kinds ───────────────────────────────────────────────────────────────────

#[test]
fn default_limits_per_kind() {
  assert_eq!(Sms::DEFAULT_LIMIT, 10);
  assert_eq!(Url::DEFAULT_LIMIT, 12);
  assert_ne!(Sms::NAME, Url::NAME);
}

// ─── Payloads ────────────────────────────────────────────────────────────────

#[test]
fn empty_payload_is_rejected() {
  assert!(matches!(check_payload(""), Err(Error::EmptyPayload)));
  assert!(check_payload("OTP 1234").is_ok());
  // Whitespace is still content; the classifier saw it.
  assert!(check_payload(" ").is_ok());
}
