//! [`SqliteHistory`] — the SQLite implementation of [`HistoryRepository`].

use std::path::Path;

use warden_core::{
  HistoryRecord, HistoryRepository, RecordOf, Verdict as _, record::check_payload,
};

use crate::{
  Error, Result,
  db::HistoryDb,
  encode::{RawRecord, SqlKind, encode_millis, now_millis},
  schema::StoreOptions,
};

// ─── Repository ──────────────────────────────────────────────────────────────

/// A classification history of kind `K` backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
pub struct SqliteHistory<K> {
  db: HistoryDb<K>,
}

impl<K> Clone for SqliteHistory<K> {
  fn clone(&self) -> Self { Self { db: self.db.clone() } }
}

impl<K: SqlKind> SqliteHistory<K> {
  /// Open (or create) a history at `path`.
  pub async fn open(path: impl AsRef<Path>, options: StoreOptions) -> Result<Self> {
    Ok(Self::new(HistoryDb::open(path, options).await?))
  }

  /// Open an in-memory history — useful for testing.
  pub async fn open_in_memory(options: StoreOptions) -> Result<Self> {
    Ok(Self::new(HistoryDb::open_in_memory(options).await?))
  }

  pub fn new(db: HistoryDb<K>) -> Self { Self { db } }

  pub fn db(&self) -> &HistoryDb<K> { &self.db }

  /// Consume the repository and close its store.
  pub async fn close(self) -> Result<()> { self.db.close().await }
}

// ─── HistoryRepository impl ──────────────────────────────────────────────────

impl<K: SqlKind> HistoryRepository<K> for SqliteHistory<K> {
  type Error = Error;

  async fn save(&self, payload: String, verdict: K::Verdict) -> Result<RecordOf<K>> {
    check_payload(&payload)?;

    let observed_at = now_millis()?;
    let timestamp = encode_millis(observed_at);
    let code = K::encode_verdict(verdict);
    let sql = format!(
      "INSERT INTO {} ({}, is_safe, timestamp) VALUES (?1, ?2, ?3)",
      K::TABLE,
      K::PAYLOAD_COLUMN,
    );
    let row_payload = payload.clone();

    let id = self
      .db
      .conn()
      .call(move |conn| {
        conn.execute(&sql, rusqlite::params![row_payload, code, timestamp])?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    tracing::debug!(
      kind = K::NAME,
      id,
      safe = ?verdict.is_safe(),
      "saved history record"
    );
    Ok(HistoryRecord { id, payload, verdict, observed_at })
  }

  async fn recent(&self, limit: usize) -> Result<Vec<RecordOf<K>>> {
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let sql = format!(
      "SELECT id, {}, is_safe, timestamp FROM {}
       ORDER BY timestamp DESC, id DESC
       LIMIT ?1",
      K::PAYLOAD_COLUMN,
      K::TABLE,
    );

    let raws: Vec<RawRecord> = self
      .db
      .conn()
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params![limit], RawRecord::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    tracing::debug!(kind = K::NAME, limit, returned = raws.len(), "read recent history");
    raws.into_iter().map(RawRecord::into_record::<K>).collect()
  }

  async fn clear(&self) -> Result<()> {
    let sql = format!("DELETE FROM {}", K::TABLE);

    let removed = self
      .db
      .conn()
      .call(move |conn| Ok(conn.execute(&sql, [])?))
      .await?;

    tracing::debug!(kind = K::NAME, removed, "cleared history");
    Ok(())
  }
}
