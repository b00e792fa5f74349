// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collection-granularity store with seeding and version-gated
//! invalidation
//!
//! Every gated read runs the version guard first, then seeds the
//! collection with the bundled defaults if no durable record exists yet.
//! The cart has its own key outside the guard: it is never seeded and
//! survives version resets.

use crate::kv::{KvStore, StorageError};
use mariella_core::{seed, BlogPost, CartItem, CollectionKind, Fair, HistoryEvent, Product};
use serde::{de::DeserializeOwned, Serialize};
use std::path::PathBuf;

/// Bump to force every existing installation to drop its locally edited
/// collections and reseed from the bundled defaults on next load. There
/// is no partial migration; this is an all-or-nothing cache bust.
pub const DATA_VERSION: &str = "2";

/// Durable key for the version marker.
pub const VERSION_KEY: &str = "mariella_data_version";

/// Durable key for the cart.
pub const CART_KEY: &str = "mariella_cart";

/// Storage key for a gated collection.
pub fn collection_key(kind: CollectionKind) -> &'static str {
    match kind {
        CollectionKind::Products => "mariella_products",
        CollectionKind::Fairs => "mariella_fairs",
        CollectionKind::History => "mariella_history",
        CollectionKind::Blog => "mariella_blog",
        CollectionKind::Categories => "mariella_categories",
    }
}

/// Durable CRUD at collection granularity over the key/value partition.
#[derive(Debug, Clone)]
pub struct CollectionStore {
    kv: KvStore,
}

impl CollectionStore {
    /// Open a store over the partition at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        Ok(Self {
            kv: KvStore::open(dir)?,
        })
    }

    /// Wrap an already opened partition.
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    pub fn get_products(&self) -> Result<Vec<Product>, StorageError> {
        self.get_or_seed(CollectionKind::Products, seed::default_products)
    }

    pub fn save_products(&self, products: &[Product]) -> Result<(), StorageError> {
        self.kv.save(collection_key(CollectionKind::Products), &products)
    }

    pub fn get_fairs(&self) -> Result<Vec<Fair>, StorageError> {
        self.get_or_seed(CollectionKind::Fairs, seed::default_fairs)
    }

    pub fn save_fairs(&self, fairs: &[Fair]) -> Result<(), StorageError> {
        self.kv.save(collection_key(CollectionKind::Fairs), &fairs)
    }

    pub fn get_history(&self) -> Result<Vec<HistoryEvent>, StorageError> {
        self.get_or_seed(CollectionKind::History, seed::default_history)
    }

    pub fn save_history(&self, history: &[HistoryEvent]) -> Result<(), StorageError> {
        self.kv.save(collection_key(CollectionKind::History), &history)
    }

    pub fn get_blog_posts(&self) -> Result<Vec<BlogPost>, StorageError> {
        self.get_or_seed(CollectionKind::Blog, seed::default_blog_posts)
    }

    pub fn save_blog_posts(&self, posts: &[BlogPost]) -> Result<(), StorageError> {
        self.kv.save(collection_key(CollectionKind::Blog), &posts)
    }

    pub fn get_categories(&self) -> Result<Vec<String>, StorageError> {
        self.get_or_seed(CollectionKind::Categories, seed::default_categories)
    }

    pub fn save_categories(&self, categories: &[String]) -> Result<(), StorageError> {
        self.kv
            .save(collection_key(CollectionKind::Categories), &categories)
    }

    /// Load the cart. Skips the version guard; an absent record is an
    /// empty cart, never a seeded one.
    pub fn load_cart(&self) -> Result<Vec<CartItem>, StorageError> {
        Ok(self.kv.load(CART_KEY)?.unwrap_or_default())
    }

    /// Persist the whole cart list.
    pub fn save_cart(&self, cart: &[CartItem]) -> Result<(), StorageError> {
        self.kv.save(CART_KEY, &cart)
    }

    fn get_or_seed<T, F>(&self, kind: CollectionKind, defaults: F) -> Result<Vec<T>, StorageError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Vec<T>,
    {
        self.ensure_version()?;
        let key = collection_key(kind);
        if let Some(stored) = self.kv.load(key)? {
            return Ok(stored);
        }
        let list = defaults();
        self.kv.save(key, &list)?;
        tracing::info!(
            collection = %kind,
            records = list.len(),
            "seeded collection with bundled defaults"
        );
        Ok(list)
    }

    /// Compare the stored marker against [`DATA_VERSION`]; on mismatch
    /// (or an absent marker) drop every gated collection, cart untouched,
    /// and record the current marker.
    fn ensure_version(&self) -> Result<(), StorageError> {
        let stored: Option<String> = match self.kv.load(VERSION_KEY) {
            Ok(stored) => stored,
            // An opaque marker that no longer parses counts as a version
            // change rather than a fatal hydration error.
            Err(StorageError::Malformed { .. }) => {
                tracing::warn!("unreadable version marker, treating as version change");
                None
            }
            Err(e) => return Err(e),
        };
        if stored.as_deref() == Some(DATA_VERSION) {
            return Ok(());
        }
        for kind in CollectionKind::ALL {
            self.kv.delete(collection_key(kind))?;
        }
        self.kv.save(VERSION_KEY, &DATA_VERSION)?;
        tracing::warn!(
            stored = stored.as_deref().unwrap_or("<none>"),
            current = DATA_VERSION,
            "data version changed, dropped seeded collections"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "collections_tests.rs"]
mod tests;
