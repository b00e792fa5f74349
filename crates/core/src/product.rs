// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog product records

use crate::currency::Currency;
use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// Field names serialize in the storefront's historical wire format
/// (`priceUYU`, `isFeatured`, …) so durable records written by earlier
/// deployments stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "priceUYU")]
    pub price_uyu: u32,
    #[serde(rename = "priceUSD")]
    pub price_usd: u32,
    /// Free-form category name; expected to match a live category value
    /// but not enforced anywhere.
    pub category: String,
    /// Ordered image URLs; the first one is the cover.
    pub images: Vec<String>,
    pub materials: Vec<String>,
    pub colors: Vec<String>,
    pub dimensions: String,
    pub is_featured: bool,
}

impl Product {
    /// Price in the given display currency.
    pub fn price_in(&self, currency: Currency) -> u32 {
        match currency {
            Currency::Uyu => self.price_uyu,
            Currency::Usd => self.price_usd,
        }
    }
}
