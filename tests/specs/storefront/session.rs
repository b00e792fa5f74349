// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Admin session behavior.

use crate::prelude::*;

#[test]
fn login_logout_flow() {
    let (mut state, _dir) = fresh_state();

    assert!(!state.login("wrong"));
    assert!(!state.is_admin());

    assert!(state.login("mariella2024"));
    assert!(state.is_admin());

    state.logout();
    assert!(!state.is_admin());
}

#[test]
fn the_session_is_volatile_per_process() {
    let (mut state, dir) = fresh_state();
    assert!(state.login("mariella2024"));

    // A reload starts anonymous again; nothing about the session is
    // written to the partition.
    let reopened = reopen(&dir);
    assert!(!reopened.is_admin());

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert!(entries.iter().all(|name| !name.contains("session")));
}
