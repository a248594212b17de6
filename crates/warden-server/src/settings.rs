//! Runtime configuration, layered from an optional TOML file and `WARDEN_*`
//! environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;
use warden_store_sqlite::{StoreOptions, UpgradePolicy};

/// Server configuration. Every field has a default, so an absent file is
/// a valid configuration.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:           String,
  pub port:           u16,
  /// Directory holding one database file per history kind.
  pub data_dir:       PathBuf,
  pub upgrade_policy: UpgradePolicy,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:           "127.0.0.1".into(),
      port:           5233,
      data_dir:       PathBuf::from("~/.local/share/warden"),
      upgrade_policy: UpgradePolicy::Preserve,
    }
  }
}

impl ServerConfig {
  /// Read `path` (if it exists), then overlay `WARDEN_*` variables.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("WARDEN"))
      .build()
      .context("failed to read config file")?;

    settings
      .try_deserialize()
      .context("failed to deserialise ServerConfig")
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// `data_dir` with a leading `~` expanded.
  pub fn data_dir(&self) -> PathBuf { expand_tilde(&self.data_dir) }

  pub fn store_options(&self) -> StoreOptions {
    StoreOptions { upgrade: self.upgrade_policy, ..StoreOptions::default() }
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
