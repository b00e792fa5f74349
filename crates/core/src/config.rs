// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Store configuration
//!
//! A deployment carries at most a tiny TOML file: where the durable
//! partition lives and which WhatsApp number receives checkout
//! hand-offs. Everything has a default so the zero-config path works.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Number orders are handed off to when no config overrides it.
const DEFAULT_CONTACT_PHONE: &str = "59898766318";

/// Errors that can occur loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Runtime configuration for the storefront core.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding the durable key/value partition.
    pub data_dir: PathBuf,
    /// WhatsApp number checkout deep links point at.
    pub contact_phone: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        let data_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mariella");
        Self {
            data_dir,
            contact_phone: DEFAULT_CONTACT_PHONE.to_string(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from a TOML file. Absent keys fall back to the
    /// defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&raw)?)
    }

    /// Configuration rooted at an explicit data directory (tests,
    /// embedders).
    pub fn at(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }
}
