// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Version-gated reset behavior.

use crate::prelude::*;
use mariella_core::seed;
use mariella_storage::{KvStore, DATA_VERSION, VERSION_KEY};
use similar_asserts::assert_eq;

#[test]
fn a_version_bump_resets_collections_but_spares_the_cart() {
    let (mut state, dir) = fresh_state();

    // An installation with local edits and a cart in progress.
    let first = state.product("1").unwrap().clone();
    state.add_to_cart(&first).unwrap();
    state.delete_product("2").unwrap();
    state.add_category("Llaveros").unwrap();
    let cart_before = state.cart().to_vec();
    drop(state);

    // Deploying a build with a different version constant looks like a
    // stale marker on disk.
    let kv = KvStore::open(dir.path()).unwrap();
    kv.save(VERSION_KEY, &"0").unwrap();

    // Next hydration reseeds every gated collection from the defaults.
    let state = reopen(&dir);
    assert_eq!(state.products(), seed::default_products());
    assert_eq!(state.categories(), seed::default_categories());

    // The cart is deep-equal across the reset.
    assert_eq!(state.cart(), cart_before);

    // And the marker now records the current version.
    let marker: Option<String> = kv.load(VERSION_KEY).unwrap();
    assert_eq!(marker.as_deref(), Some(DATA_VERSION));
}

#[test]
fn a_matching_marker_preserves_local_edits() {
    let (mut state, dir) = fresh_state();
    state.delete_product("3").unwrap();
    let products_before = state.products().to_vec();
    drop(state);

    let state = reopen(&dir);
    assert_eq!(state.products(), products_before);
}
