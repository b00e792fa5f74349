// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the state container

use mariella_storage::StorageError;
use thiserror::Error;

/// Errors surfaced by state container operations
#[derive(Debug, Error)]
pub enum StateError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
