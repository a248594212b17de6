//! [`StoreCell`] — a history opened on first use, exactly once.

use std::path::{Path, PathBuf};

use tokio::sync::OnceCell;
use warden_core::{HistoryRepository, RecordOf};

use crate::{Error, Result, encode::SqlKind, repo::SqliteHistory, schema::StoreOptions};

enum Location {
  File(PathBuf),
  Memory,
}

/// Lazily opened [`SqliteHistory`].
///
/// The first caller to need the store opens it; concurrent first callers wait
/// on that same open instead of racing to create a second connection. If the
/// open fails, the cell stays empty and the next caller tries again.
///
/// Share it behind an `Arc`; there is no process-global instance.
pub struct StoreCell<K> {
  location: Location,
  options:  StoreOptions,
  history:  OnceCell<SqliteHistory<K>>,
}

impl<K: SqlKind> StoreCell<K> {
  pub fn new(path: impl Into<PathBuf>, options: StoreOptions) -> Self {
    Self::with_location(Location::File(path.into()), options)
  }

  /// A cell for `K`'s conventional file name inside `dir`.
  pub fn in_dir(dir: impl AsRef<Path>, options: StoreOptions) -> Self {
    Self::new(dir.as_ref().join(K::FILE_NAME), options)
  }

  pub fn in_memory(options: StoreOptions) -> Self {
    Self::with_location(Location::Memory, options)
  }

  fn with_location(location: Location, options: StoreOptions) -> Self {
    Self { location, options, history: OnceCell::new() }
  }

  /// The backing file, or `None` for an in-memory cell.
  pub fn path(&self) -> Option<&Path> {
    match &self.location {
      Location::File(path) => Some(path),
      Location::Memory => None,
    }
  }

  pub fn is_open(&self) -> bool { self.history.initialized() }

  /// The history, opening it if this is the first access.
  pub async fn get(&self) -> Result<&SqliteHistory<K>> {
    self
      .history
      .get_or_try_init(|| async {
        match &self.location {
          Location::File(path) => SqliteHistory::open(path, self.options).await,
          Location::Memory => SqliteHistory::open_in_memory(self.options).await,
        }
      })
      .await
  }
}

impl<K: SqlKind> HistoryRepository<K> for StoreCell<K> {
  type Error = Error;

  async fn save(&self, payload: String, verdict: K::Verdict) -> Result<RecordOf<K>> {
    self.get().await?.save(payload, verdict).await
  }

  async fn recent(&self, limit: usize) -> Result<Vec<RecordOf<K>>> {
    self.get().await?.recent(limit).await
  }

  async fn clear(&self) -> Result<()> { self.get().await?.clear().await }
}
