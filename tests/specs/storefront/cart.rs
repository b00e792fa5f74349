// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The shopping cart, end to end.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn fresh_visitor_cart_flow() {
    // Fresh browser state: the bundled default products are there.
    let (mut state, _dir) = fresh_state();
    assert_eq!(state.products().len(), 3);
    let first = state.product("1").unwrap().clone();

    // First add: one line, quantity 1.
    state.add_to_cart(&first).unwrap();
    assert_eq!(state.cart().len(), 1);
    assert_eq!(state.cart()[0].id(), "1");
    assert_eq!(state.cart()[0].quantity, 1);

    // Second add of the same product merges, not a second line.
    state.add_to_cart(&first).unwrap();
    assert_eq!(state.cart().len(), 1);
    assert_eq!(state.cart()[0].quantity, 2);

    // Removing the line empties the cart.
    state.remove_from_cart("1").unwrap();
    assert!(state.cart().is_empty());
}

#[test]
fn decrement_never_drops_below_one() {
    let (mut state, _dir) = fresh_state();
    let first = state.product("1").unwrap().clone();
    state.add_to_cart(&first).unwrap();

    state.update_quantity("1", -5).unwrap();
    assert_eq!(state.cart()[0].quantity, 1);
}

#[test]
fn every_cart_change_reaches_disk_immediately() {
    let (mut state, dir) = fresh_state();
    let first = state.product("1").unwrap().clone();

    state.add_to_cart(&first).unwrap();
    assert_eq!(reopen(&dir).cart(), state.cart());

    state.update_quantity("1", 2).unwrap();
    assert_eq!(reopen(&dir).cart(), state.cart());

    state.clear_cart().unwrap();
    assert!(reopen(&dir).cart().is_empty());
}

#[test]
fn checkout_renders_the_cart_into_the_deep_link() {
    let (mut state, _dir) = fresh_state();
    let first = state.product("1").unwrap().clone();
    state.add_to_cart(&first).unwrap();
    state.add_to_cart(&first).unwrap();

    let message = state.order_message().unwrap();
    assert!(message.contains("• 2x"));
    assert!(message.ends_with(&format!("Total: UYU {}", state.cart_total())));

    let url = state.checkout_url().unwrap();
    assert!(url.starts_with("https://wa.me/"));
    assert!(!url.contains(' '));
}
