// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Application state container
//!
//! The single in-memory source of truth for the catalog collections, the
//! cart, the display currency, and the admin session. Construction is
//! explicit and there is no ambient global; the mutation methods below
//! are the only write path, and each returns only after the affected
//! collection's durable write completed.

use crate::checkout;
use crate::error::StateError;
use crate::events::{EventBus, EventReceiver, StoreEvent, Subscription};
use crate::export::SeedSnapshot;
use crate::session::AdminSession;
use mariella_core::{
    cart, category, BlogPost, CartItem, CollectionKind, Currency, Fair, HistoryEvent, Product,
    StoreConfig,
};
use mariella_storage::CollectionStore;

pub struct AppState {
    store: CollectionStore,
    bus: EventBus,
    config: StoreConfig,
    products: Vec<Product>,
    fairs: Vec<Fair>,
    history: Vec<HistoryEvent>,
    blog_posts: Vec<BlogPost>,
    categories: Vec<String>,
    cart: Vec<CartItem>,
    currency: Currency,
    session: AdminSession,
}

impl AppState {
    /// Open the durable partition and hydrate every collection. Runs
    /// once per session; the version guard fires on the first read.
    pub fn open(config: &StoreConfig) -> Result<Self, StateError> {
        let store = CollectionStore::open(&config.data_dir)?;
        Self::hydrate(store, config.clone())
    }

    /// Hydrate from an already opened store.
    pub fn with_store(store: CollectionStore, config: StoreConfig) -> Result<Self, StateError> {
        Self::hydrate(store, config)
    }

    fn hydrate(store: CollectionStore, config: StoreConfig) -> Result<Self, StateError> {
        let products = store.get_products()?;
        let fairs = store.get_fairs()?;
        let history = store.get_history()?;
        let blog_posts = store.get_blog_posts()?;
        let categories = store.get_categories()?;
        let cart = store.load_cart()?;
        tracing::debug!(
            products = products.len(),
            cart_lines = cart.len(),
            "hydrated application state"
        );
        Ok(Self {
            store,
            bus: EventBus::new(),
            config,
            products,
            fairs,
            history,
            blog_posts,
            categories,
            cart,
            currency: Currency::default(),
            session: AdminSession::new(),
        })
    }

    // Snapshot accessors

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn fairs(&self) -> &[Fair] {
        &self.fairs
    }

    pub fn history(&self) -> &[HistoryEvent] {
        &self.history
    }

    pub fn blog_posts(&self) -> &[BlogPost] {
        &self.blog_posts
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_authenticated()
    }

    // Catalog queries

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn featured_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_featured).collect()
    }

    /// Products in a category; the sentinel means "no filter".
    pub fn products_in_category(&self, name: &str) -> Vec<&Product> {
        if name == category::CATEGORY_ALL {
            return self.products.iter().collect();
        }
        self.products.iter().filter(|p| p.category == name).collect()
    }

    /// Total number of units in the cart (what the header badge shows).
    pub fn cart_item_count(&self) -> u32 {
        self.cart.iter().map(|item| item.quantity).sum()
    }

    /// Cart total in the active display currency.
    pub fn cart_total(&self) -> u64 {
        cart::cart_total(&self.cart, self.currency)
    }

    // Cart operations

    /// Add one unit of the product, merging with an existing line.
    pub fn add_to_cart(&mut self, product: &Product) -> Result<(), StateError> {
        match self.cart.iter_mut().find(|item| item.product.id == product.id) {
            Some(line) => line.quantity += 1,
            None => self.cart.push(CartItem::new(product.clone())),
        }
        self.persist_cart()
    }

    /// Drop the matching line entirely.
    pub fn remove_from_cart(&mut self, id: &str) -> Result<(), StateError> {
        self.cart.retain(|item| item.product.id != id);
        self.persist_cart()
    }

    /// Adjust a line's quantity by `delta`, floored at 1. Lines only
    /// leave the cart through `remove_from_cart`.
    pub fn update_quantity(&mut self, id: &str, delta: i64) -> Result<(), StateError> {
        if let Some(line) = self.cart.iter_mut().find(|item| item.product.id == id) {
            let adjusted = i64::from(line.quantity).saturating_add(delta);
            line.quantity = adjusted.clamp(1, i64::from(u32::MAX)) as u32;
        }
        self.persist_cart()
    }

    pub fn clear_cart(&mut self) -> Result<(), StateError> {
        self.cart.clear();
        self.persist_cart()
    }

    /// Every cart change writes the whole list back, not just the
    /// changed line.
    fn persist_cart(&mut self) -> Result<(), StateError> {
        self.store.save_cart(&self.cart)?;
        self.bus.publish(StoreEvent::CartChanged {
            lines: self.cart.len(),
        });
        Ok(())
    }

    // Catalog products

    pub fn add_product(&mut self, product: Product) -> Result<(), StateError> {
        self.products.push(product);
        self.persist_products()
    }

    /// Replace the first product with a matching id; unknown ids change
    /// nothing.
    pub fn update_product(&mut self, product: Product) -> Result<(), StateError> {
        if let Some(existing) = self.products.iter_mut().find(|p| p.id == product.id) {
            *existing = product;
        }
        self.persist_products()
    }

    pub fn delete_product(&mut self, id: &str) -> Result<(), StateError> {
        self.products.retain(|p| p.id != id);
        self.persist_products()
    }

    fn persist_products(&mut self) -> Result<(), StateError> {
        self.store.save_products(&self.products)?;
        self.publish_collection(CollectionKind::Products);
        Ok(())
    }

    // Fairs

    pub fn add_fair(&mut self, fair: Fair) -> Result<(), StateError> {
        self.fairs.push(fair);
        self.persist_fairs()
    }

    pub fn update_fair(&mut self, fair: Fair) -> Result<(), StateError> {
        if let Some(existing) = self.fairs.iter_mut().find(|f| f.id == fair.id) {
            *existing = fair;
        }
        self.persist_fairs()
    }

    pub fn delete_fair(&mut self, id: &str) -> Result<(), StateError> {
        self.fairs.retain(|f| f.id != id);
        self.persist_fairs()
    }

    fn persist_fairs(&mut self) -> Result<(), StateError> {
        self.store.save_fairs(&self.fairs)?;
        self.publish_collection(CollectionKind::Fairs);
        Ok(())
    }

    // History timeline

    pub fn add_history_event(&mut self, event: HistoryEvent) -> Result<(), StateError> {
        self.history.push(event);
        self.persist_history()
    }

    pub fn update_history_event(&mut self, event: HistoryEvent) -> Result<(), StateError> {
        if let Some(existing) = self.history.iter_mut().find(|h| h.id == event.id) {
            *existing = event;
        }
        self.persist_history()
    }

    pub fn delete_history_event(&mut self, id: &str) -> Result<(), StateError> {
        self.history.retain(|h| h.id != id);
        self.persist_history()
    }

    fn persist_history(&mut self) -> Result<(), StateError> {
        self.store.save_history(&self.history)?;
        self.publish_collection(CollectionKind::History);
        Ok(())
    }

    // Blog

    pub fn add_blog_post(&mut self, post: BlogPost) -> Result<(), StateError> {
        self.blog_posts.push(post);
        self.persist_blog()
    }

    pub fn update_blog_post(&mut self, post: BlogPost) -> Result<(), StateError> {
        if let Some(existing) = self.blog_posts.iter_mut().find(|b| b.id == post.id) {
            *existing = post;
        }
        self.persist_blog()
    }

    pub fn delete_blog_post(&mut self, id: &str) -> Result<(), StateError> {
        self.blog_posts.retain(|b| b.id != id);
        self.persist_blog()
    }

    fn persist_blog(&mut self) -> Result<(), StateError> {
        self.store.save_blog_posts(&self.blog_posts)?;
        self.publish_collection(CollectionKind::Blog);
        Ok(())
    }

    // Categories

    /// Adding an existing category is a no-op; nothing is written.
    pub fn add_category(&mut self, name: impl Into<String>) -> Result<(), StateError> {
        let name = name.into();
        if self.categories.contains(&name) {
            return Ok(());
        }
        self.categories.push(name);
        self.persist_categories()
    }

    /// Categories are removed by value. Deleting the sentinel is
    /// silently refused; every catalog view relies on it.
    pub fn delete_category(&mut self, name: &str) -> Result<(), StateError> {
        if name == category::CATEGORY_ALL {
            tracing::debug!("ignored attempt to delete the sentinel category");
            return Ok(());
        }
        self.categories.retain(|c| c != name);
        self.persist_categories()
    }

    fn persist_categories(&mut self) -> Result<(), StateError> {
        self.store.save_categories(&self.categories)?;
        self.publish_collection(CollectionKind::Categories);
        Ok(())
    }

    // Session & currency

    /// Try to open the admin session. The flag is process-local and gone
    /// on restart.
    pub fn login(&mut self, password: &str) -> bool {
        let ok = self.session.login(password);
        if ok {
            self.bus.publish(StoreEvent::SessionOpened);
        }
        ok
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.bus.publish(StoreEvent::SessionClosed);
    }

    /// Switch the display currency. Stored amounts never change; only
    /// which price field is read downstream.
    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
        self.bus.publish(StoreEvent::CurrencyChanged { currency });
    }

    // Observation & exports

    /// Subscribe to state changes. The receiver sees events published
    /// after this call.
    pub fn subscribe(&self, subscription: Subscription) -> EventReceiver {
        self.bus.subscribe(subscription)
    }

    pub fn unsubscribe(&self, id: &str) {
        self.bus.unsubscribe(id);
    }

    /// Checkout hand-off: the WhatsApp deep link for the current cart.
    pub fn checkout_url(&self) -> Result<String, StateError> {
        Ok(checkout::checkout_url(
            &self.cart,
            self.currency,
            &self.config.contact_phone,
        )?)
    }

    /// The free-text order message behind the deep link.
    pub fn order_message(&self) -> Result<String, StateError> {
        Ok(checkout::order_message(&self.cart, self.currency)?)
    }

    /// Seed snapshot of all five collections for manual redeployment.
    pub fn export_seed(&self) -> Result<String, StateError> {
        let snapshot = SeedSnapshot {
            products: &self.products,
            fairs: &self.fairs,
            history: &self.history,
            blog_posts: &self.blog_posts,
            categories: &self.categories,
        };
        Ok(snapshot.render()?)
    }

    fn publish_collection(&self, collection: CollectionKind) {
        self.bus.publish(StoreEvent::CollectionChanged { collection });
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
