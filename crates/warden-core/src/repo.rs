//! The [`HistoryRepository`] trait: typed access to one classification
//! history.

use crate::{kind::HistoryKind, record::HistoryRecord};

/// Shorthand for the record type of kind `K`.
pub type RecordOf<K> = HistoryRecord<<K as HistoryKind>::Verdict>;

/// Abstraction over a history backend for a single [`HistoryKind`].
///
/// Records are append-only; the only destructive operation is
/// [`clear`](Self::clear). Each call is its own unit of work.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait HistoryRepository<K: HistoryKind>: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a classification result, stamping it with the current time.
  /// Returns the record as stored.
  fn save(
    &self,
    payload: String,
    verdict: K::Verdict,
  ) -> impl Future<Output = Result<RecordOf<K>, Self::Error>> + Send + '_;

  /// Up to `limit` records, most recent first. Records observed in the same
  /// millisecond come back newest-id first.
  fn recent(
    &self,
    limit: usize,
  ) -> impl Future<Output = Result<Vec<RecordOf<K>>, Self::Error>> + Send + '_;

  /// Delete every record. Irreversible.
  fn clear(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// [`recent`](Self::recent) with the kind's default page size.
  fn recent_default(
    &self,
  ) -> impl Future<Output = Result<Vec<RecordOf<K>>, Self::Error>> + Send + '_ {
    self.recent(K::DEFAULT_LIMIT)
  }
}
