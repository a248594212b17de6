//! [`HistoryDb`] — one SQLite file holding one history table.

use std::{marker::PhantomData, path::Path};

use crate::{
  Result,
  encode::SqlKind,
  schema::{self, CONNECTION_PRAGMAS, SchemaPlan, StoreOptions},
};

/// The embedded store behind a history of kind `K`.
///
/// Owns the connection and the schema lifecycle. Cloning is cheap; clones
/// share the same connection thread, which serialises every statement.
pub struct HistoryDb<K> {
  conn:  tokio_rusqlite::Connection,
  _kind: PhantomData<fn() -> K>,
}

impl<K> Clone for HistoryDb<K> {
  fn clone(&self) -> Self { Self { conn: self.conn.clone(), _kind: PhantomData } }
}

impl<K: SqlKind> HistoryDb<K> {
  /// Open (or create) the database at `path` and bring its schema to
  /// `options.version`.
  pub async fn open(path: impl AsRef<Path>, options: StoreOptions) -> Result<Self> {
    let path = path.as_ref();
    tracing::debug!(kind = K::NAME, path = %path.display(), "opening history store");
    let conn = tokio_rusqlite::Connection::open(path).await?;
    Self::init(conn, options).await
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory(options: StoreOptions) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    Self::init(conn, options).await
  }

  async fn init(conn: tokio_rusqlite::Connection, options: StoreOptions) -> Result<Self> {
    let db = Self { conn, _kind: PhantomData };
    db.conn
      .call(|conn| {
        conn.execute_batch(CONNECTION_PRAGMAS)?;
        Ok(())
      })
      .await?;
    db.migrate(options).await?;
    Ok(db)
  }

  async fn migrate(&self, options: StoreOptions) -> Result<()> {
    let found = self.schema_version().await?;
    let plan = schema::plan(found, options)?;

    match plan {
      SchemaPlan::Current => return Ok(()),
      SchemaPlan::Create => {
        tracing::info!(kind = K::NAME, version = options.version, "creating history table");
      }
      SchemaPlan::Restamp => {
        tracing::info!(
          kind = K::NAME,
          from = found,
          to = options.version,
          "upgrading history schema, rows preserved"
        );
      }
      SchemaPlan::Recreate => {
        tracing::warn!(
          kind = K::NAME,
          from = found,
          to = options.version,
          "upgrading history schema destructively, all rows dropped"
        );
      }
    }

    let create = schema::create_table(K::TABLE, K::PAYLOAD_COLUMN);
    let drop_sql = schema::drop_table(K::TABLE);
    let version = options.version;

    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        match plan {
          SchemaPlan::Create | SchemaPlan::Restamp => tx.execute_batch(&create)?,
          SchemaPlan::Recreate => {
            tx.execute_batch(&drop_sql)?;
            tx.execute_batch(&create)?;
          }
          SchemaPlan::Current => {}
        }
        tx.pragma_update(None, "user_version", version)?;
        tx.commit()?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// The version stamped in the file; `0` for a file never initialised.
  pub async fn schema_version(&self) -> Result<u32> {
    let version: u32 = self
      .conn
      .call(|conn| Ok(conn.query_row("PRAGMA user_version", [], |row| row.get(0))?))
      .await?;
    Ok(version)
  }

  /// Close the connection, reporting any error SQLite raises while doing so.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    Ok(())
  }

  pub(crate) fn conn(&self) -> &tokio_rusqlite::Connection { &self.conn }
}
