// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Seed snapshot export
//!
//! Admin edits live only in one installation's durable partition. The
//! export serializes all five collections into a single document a
//! developer pastes back into the bundled seed data (and bumps the data
//! version), making those edits part of the next deployment. A build-time
//! side-channel, not a runtime interface.

use mariella_core::{BlogPost, Fair, HistoryEvent, Product};
use serde::Serialize;

/// The five collections in one exportable document. Field names match
/// the durable wire format.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedSnapshot<'a> {
    pub products: &'a [Product],
    pub fairs: &'a [Fair],
    pub history: &'a [HistoryEvent],
    pub blog_posts: &'a [BlogPost],
    pub categories: &'a [String],
}

impl SeedSnapshot<'_> {
    /// Pretty-printed JSON for copy-paste redeployment.
    pub fn render(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mariella_core::seed;

    #[test]
    fn snapshot_contains_all_five_collections() {
        let products = seed::default_products();
        let fairs = seed::default_fairs();
        let history = seed::default_history();
        let blog_posts = seed::default_blog_posts();
        let categories = seed::default_categories();

        let rendered = SeedSnapshot {
            products: &products,
            fairs: &fairs,
            history: &history,
            blog_posts: &blog_posts,
            categories: &categories,
        }
        .render()
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["products"].as_array().unwrap().len(), 3);
        assert_eq!(value["fairs"].as_array().unwrap().len(), 2);
        assert_eq!(value["history"].as_array().unwrap().len(), 3);
        assert_eq!(value["blogPosts"].as_array().unwrap().len(), 4);
        assert_eq!(value["categories"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn snapshot_round_trips_product_data() {
        let products = seed::default_products();
        let rendered = SeedSnapshot {
            products: &products,
            fairs: &[],
            history: &[],
            blog_posts: &[],
            categories: &[],
        }
        .render()
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        let back: Vec<Product> = serde_json::from_value(value["products"].clone()).unwrap();
        assert_eq!(back, products);
    }
}
