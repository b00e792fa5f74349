// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Admin catalog editing across every collection.

use crate::prelude::*;
use mariella_core::{BlogPost, Fair, FairStatus, HistoryEvent, IdGen, Product, SequentialIdGen};
use similar_asserts::assert_eq;

fn product(id: &str) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Producto {id}"),
        description: "una pieza de prueba".to_string(),
        price_uyu: 1500,
        price_usd: 40,
        category: "Billeteras".to_string(),
        images: vec![],
        materials: vec!["Cuero".to_string()],
        colors: vec!["Negro".to_string()],
        dimensions: "12cm x 9cm".to_string(),
        is_featured: false,
    }
}

#[test]
fn edits_to_every_collection_survive_a_reload() {
    let (mut state, dir) = fresh_state();
    let ids = SequentialIdGen::new("spec");

    state.add_product(product(&ids.next())).unwrap();
    state
        .add_fair(Fair {
            id: ids.next(),
            name: "Feria de la Mano".into(),
            date: "2026-04-12".into(),
            city: "Punta del Este".into(),
            location: "Plaza Artigas".into(),
            description: "Nueva colección de otoño.".into(),
            image_url: None,
            maps_url: None,
            status: FairStatus::Upcoming,
        })
        .unwrap();
    state
        .add_history_event(HistoryEvent {
            id: ids.next(),
            year: "2026".into(),
            title: "Nueva Etapa".into(),
            description: "Abrimos el taller al público.".into(),
            image_url: "https://example.com/taller.jpg".into(),
        })
        .unwrap();
    state
        .add_blog_post(BlogPost {
            id: ids.next(),
            title: "Taller Abierto".into(),
            excerpt: "Visitas guiadas todos los sábados.".into(),
            content: "Desde este mes recibimos visitas.".into(),
            author: "Mariela Calistro".into(),
            date: "2 Ago 2026".into(),
            image_url: "https://example.com/visitas.jpg".into(),
            read_time: "1 min lectura".into(),
        })
        .unwrap();
    state.add_category("Llaveros").unwrap();

    let reopened = reopen(&dir);
    assert_eq!(reopened.products(), state.products());
    assert_eq!(reopened.fairs(), state.fairs());
    assert_eq!(reopened.history(), state.history());
    assert_eq!(reopened.blog_posts(), state.blog_posts());
    assert_eq!(reopened.categories(), state.categories());
}

#[test]
fn update_replaces_by_id_and_unknown_ids_are_ignored() {
    let (mut state, _dir) = fresh_state();

    let mut edited = state.product("2").unwrap().clone();
    edited.price_uyu = 7000;
    state.update_product(edited).unwrap();
    assert_eq!(state.product("2").unwrap().price_uyu, 7000);

    let before = state.products().to_vec();
    state.update_product(product("ghost")).unwrap();
    assert_eq!(state.products(), before);
}

#[test]
fn duplicate_ids_are_accepted_and_deleted_together() {
    let (mut state, _dir) = fresh_state();
    state.add_product(product("dup")).unwrap();
    state.add_product(product("dup")).unwrap();
    assert_eq!(state.products().len(), 5);

    state.delete_product("dup").unwrap();
    assert_eq!(state.products().len(), 3);
}

#[test]
fn category_rules_hold_through_the_container() {
    let (mut state, dir) = fresh_state();
    let before = state.categories().to_vec();

    // Idempotent add, protected sentinel.
    state.add_category("Carteras").unwrap();
    state.delete_category("Todas").unwrap();
    assert_eq!(state.categories(), before);

    state.delete_category("Cintos").unwrap();
    let reopened = reopen(&dir);
    assert!(!reopened.categories().contains(&"Cintos".to_string()));
    assert!(reopened.categories().contains(&"Todas".to_string()));
}

#[test]
fn export_snapshot_round_trips_the_catalog() {
    let (mut state, _dir) = fresh_state();
    state.add_product(product("100")).unwrap();

    let rendered = state.export_seed().unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    let products: Vec<Product> = serde_json::from_value(value["products"].clone()).unwrap();
    assert_eq!(products, state.products());
    assert_eq!(
        value["categories"].as_array().unwrap().len(),
        state.categories().len()
    );
}
