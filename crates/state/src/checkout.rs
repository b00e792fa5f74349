// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Checkout hand-off
//!
//! There is no payment flow. Checkout renders the cart into a free-text
//! order message and builds the WhatsApp deep link a view opens in a new
//! tab. One-way: nothing comes back into the core.

use mariella_core::{cart, CartItem, Currency};
use minijinja::{context, Environment};

/// Order message, matching the text customers have always sent.
const ORDER_TEMPLATE: &str = "Hola MARIEL'LA, me gustaría realizar el siguiente pedido:\n\n{% for item in items %}• {{ item.quantity }}x {{ item.name }} ({{ currency }} {{ item.price }})\n{% endfor %}\nTotal: {{ currency }} {{ total }}";

/// Render the free-text order message for the cart.
pub fn order_message(
    cart_lines: &[CartItem],
    currency: Currency,
) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("order", ORDER_TEMPLATE)?;

    let items: Vec<_> = cart_lines
        .iter()
        .map(|item| {
            context! {
                quantity => item.quantity,
                name => item.product.name,
                price => item.product.price_in(currency),
            }
        })
        .collect();

    let template = env.get_template("order")?;
    template.render(context! {
        items,
        currency => currency.to_string(),
        total => cart::cart_total(cart_lines, currency),
    })
}

/// The deep link opening WhatsApp with the order message prefilled.
pub fn checkout_url(
    cart_lines: &[CartItem],
    currency: Currency,
    phone: &str,
) -> Result<String, minijinja::Error> {
    let message = order_message(cart_lines, currency)?;
    Ok(format!("https://wa.me/{phone}?text={}", percent_encode(&message)))
}

/// Percent-encoding for the `text` query value, byte-wise so the
/// message's multi-byte UTF-8 survives.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for byte in s.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
#[path = "checkout_tests.rs"]
mod tests;
