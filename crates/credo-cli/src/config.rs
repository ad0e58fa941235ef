//! Optional TOML config file and the precedence rules around it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Contents of the file passed with `--config`. Every key is optional.
#[derive(Deserialize, Default, Debug, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
  pub data_dir:      Option<PathBuf>,
  pub min_query_len: Option<usize>,
}

impl ConfigFile {
  pub fn read(path: &Path) -> Result<Self> {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")
  }
}

/// Settings after flags, environment, file and defaults have been layered.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
  pub data_dir:      PathBuf,
  pub min_query_len: usize,
}

impl Settings {
  /// `flag` already folds in `CREDO_DATA_DIR` through clap, so the order is
  /// flag, then environment, then file, then default.
  pub fn resolve(flag: Option<PathBuf>, file: ConfigFile) -> Self {
    Self {
      data_dir:      flag
        .or(file.data_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
      min_query_len: file.min_query_len.unwrap_or(DEFAULT_MIN_QUERY_LEN),
    }
  }
}
