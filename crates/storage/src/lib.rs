// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! mariella-storage: durable collection store for the MARIEL'LA
//! storefront core
//!
//! This crate provides:
//! - A JSON file-backed key/value partition, one document per named key
//! - Collection-granularity get/save with lazy default seeding
//! - The version guard that force-resets seeded collections on deploys

pub mod collections;
pub mod kv;

pub use collections::{CollectionStore, CART_KEY, DATA_VERSION, VERSION_KEY};
pub use kv::{KvStore, StorageError};
