// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shopping cart lines

use crate::currency::Currency;
use crate::product::Product;
use serde::{Deserialize, Serialize};

/// One line in the shopping cart: a product copied at add time plus a
/// quantity. Later edits to the catalog product do not touch existing
/// lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// A line for one unit of the product.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// The product id this line was copied from.
    pub fn id(&self) -> &str {
        &self.product.id
    }

    /// Line subtotal in the given display currency.
    pub fn line_total(&self, currency: Currency) -> u64 {
        u64::from(self.product.price_in(currency)) * u64::from(self.quantity)
    }
}

/// Cart total in the given display currency.
pub fn cart_total(cart: &[CartItem], currency: Currency) -> u64 {
    cart.iter().map(|item| item.line_total(currency)).sum()
}
