//! SQL schema for a Warden history store.
//!
//! Each database holds one table. Its version lives in `PRAGMA user_version`
//! and is compared with the requested version every time a store is opened.

use serde::Deserialize;

use crate::{Error, Result};

/// Version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

/// Applied to every connection before schema work. Must run outside a
/// transaction.
pub const CONNECTION_PRAGMAS: &str = "PRAGMA journal_mode = WAL;";

/// What to do with existing rows when the stored schema is older than the
/// requested one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpgradePolicy {
  /// Keep every row and raise the version stamp.
  #[default]
  Preserve,
  /// Drop and recreate the table, discarding all history.
  Destructive,
}

/// How a store should be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
  pub version: u32,
  pub upgrade: UpgradePolicy,
}

impl Default for StoreOptions {
  fn default() -> Self {
    Self { version: SCHEMA_VERSION, upgrade: UpgradePolicy::default() }
  }
}

/// Schema work required to bring a file to the requested version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaPlan {
  /// Already at the requested version.
  Current,
  /// Fresh file; create the table.
  Create,
  /// Older file; keep rows, bump the stamp.
  Restamp,
  /// Older file; drop and recreate the table.
  Recreate,
}

pub fn plan(found: u32, options: StoreOptions) -> Result<SchemaPlan> {
  let expected = options.version;
  Ok(match found {
    0 => SchemaPlan::Create,
    v if v == expected => SchemaPlan::Current,
    v if v > expected => return Err(Error::SchemaDowngrade { found, expected }),
    _ => match options.upgrade {
      UpgradePolicy::Preserve => SchemaPlan::Restamp,
      UpgradePolicy::Destructive => SchemaPlan::Recreate,
    },
  })
}

/// Table DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub fn create_table(table: &str, payload_column: &str) -> String {
  format!(
    "CREATE TABLE IF NOT EXISTS {table} (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    {payload_column} TEXT NOT NULL,
    is_safe   INTEGER NOT NULL,   -- 1 safe | 0 unsafe | -1 unknown
    timestamp INTEGER NOT NULL    -- epoch milliseconds; store-assigned
);"
  )
}

pub fn drop_table(table: &str) -> String { format!("DROP TABLE IF EXISTS {table};") }

#[cfg(test)]
mod tests {
  use super::*;

  fn opts(version: u32, upgrade: UpgradePolicy) -> StoreOptions {
    StoreOptions { version, upgrade }
  }

  #[test]
  fn fresh_file_is_created() {
    assert_eq!(plan(0, StoreOptions::default()).unwrap(), SchemaPlan::Create);
  }

  #[test]
  fn matching_version_is_left_alone() {
    assert_eq!(
      plan(SCHEMA_VERSION, StoreOptions::default()).unwrap(),
      SchemaPlan::Current
    );
  }

  #[test]
  fn upgrade_follows_policy() {
    assert_eq!(
      plan(1, opts(2, UpgradePolicy::Preserve)).unwrap(),
      SchemaPlan::Restamp
    );
    assert_eq!(
      plan(1, opts(3, UpgradePolicy::Destructive)).unwrap(),
      SchemaPlan::Recreate
    );
  }

  #[test]
  fn newer_file_is_refused() {
    let err = plan(4, opts(2, UpgradePolicy::Destructive)).unwrap_err();
    assert!(matches!(err, Error::SchemaDowngrade { found: 4, expected: 2 }));
  }

  #[test]
  fn preserve_is_the_default_policy() {
    assert_eq!(StoreOptions::default().upgrade, UpgradePolicy::Preserve);
  }

  #[test]
  fn ddl_names_the_payload_column() {
    let sql = create_table("url_history", "url");
    assert!(sql.contains("CREATE TABLE IF NOT EXISTS url_history"));
    assert!(sql.contains("url TEXT NOT NULL"));
    assert!(sql.contains("AUTOINCREMENT"));
  }
}
