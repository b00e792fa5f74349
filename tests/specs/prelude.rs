// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for the behavioral specs.

use mariella_core::StoreConfig;
use mariella_state::AppState;
use tempfile::TempDir;

/// A state container over a fresh temporary partition. Keep the returned
/// `TempDir` alive for the duration of the test.
pub fn fresh_state() -> (AppState, TempDir) {
    let dir = TempDir::new().unwrap();
    let state = AppState::open(&StoreConfig::at(dir.path())).unwrap();
    (state, dir)
}

/// Hydrate a second container over the same partition, as a page reload
/// would.
pub fn reopen(dir: &TempDir) -> AppState {
    AppState::open(&StoreConfig::at(dir.path())).unwrap()
}
