// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! First-run seeding behavior.

use crate::prelude::*;
use mariella_core::{seed, CATEGORY_ALL};
use similar_asserts::assert_eq;

#[test]
fn fresh_partition_hydrates_the_bundled_defaults() {
    let (state, _dir) = fresh_state();

    assert_eq!(state.products(), seed::default_products());
    assert_eq!(state.fairs(), seed::default_fairs());
    assert_eq!(state.history(), seed::default_history());
    assert_eq!(state.blog_posts(), seed::default_blog_posts());
    assert_eq!(state.categories(), seed::default_categories());
}

#[test]
fn seeding_writes_durable_records_equal_to_the_defaults() {
    let (_state, dir) = fresh_state();

    let raw = std::fs::read_to_string(dir.path().join("mariella_products.json")).unwrap();
    let stored: Vec<mariella_core::Product> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored, seed::default_products());
}

#[test]
fn a_second_hydration_sees_the_same_defaults() {
    let (state, dir) = fresh_state();
    let again = reopen(&dir);
    assert_eq!(again.products(), state.products());
}

#[test]
fn the_cart_is_never_seeded() {
    let (state, dir) = fresh_state();
    assert!(state.cart().is_empty());
    assert!(!dir.path().join("mariella_cart.json").exists());
}

#[test]
fn default_categories_carry_the_sentinel() {
    let (state, _dir) = fresh_state();
    assert!(state.categories().contains(&CATEGORY_ALL.to_string()));
}
