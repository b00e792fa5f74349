// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Store events and the observation bus
//!
//! Observation is explicit: a view subscribes with name patterns and
//! drains its receiver after mutations complete. The container publishes
//! only after the durable write succeeded, so a redraw never races a
//! half-persisted change.

use mariella_core::{CollectionKind, Currency};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::mpsc;

/// Sender for event delivery
pub type EventSender = mpsc::UnboundedSender<StoreEvent>;
/// Receiver for event delivery
pub type EventReceiver = mpsc::UnboundedReceiver<StoreEvent>;

/// A change in the application state worth observing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// One of the five seeded collections changed.
    CollectionChanged { collection: CollectionKind },
    /// The cart changed; carries the new number of lines.
    CartChanged { lines: usize },
    /// The display currency switched.
    CurrencyChanged { currency: Currency },
    /// The admin session opened.
    SessionOpened,
    /// The admin session closed.
    SessionClosed,
}

impl StoreEvent {
    /// Stable event name, e.g. `collection:products` or `cart:changed`.
    pub fn name(&self) -> String {
        match self {
            StoreEvent::CollectionChanged { collection } => format!("collection:{collection}"),
            StoreEvent::CartChanged { .. } => "cart:changed".to_string(),
            StoreEvent::CurrencyChanged { .. } => "currency:changed".to_string(),
            StoreEvent::SessionOpened => "session:opened".to_string(),
            StoreEvent::SessionClosed => "session:closed".to_string(),
        }
    }
}

/// Pattern for matching event names: exact segments, `*` matches any one
/// segment. `collection:*` matches every collection event.
#[derive(Debug, Clone)]
pub struct EventPattern(String);

impl EventPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    /// Check if this pattern matches an event name
    pub fn matches(&self, event_name: &str) -> bool {
        let mut pattern = self.0.split(':');
        let mut event = event_name.split(':');
        loop {
            match (pattern.next(), event.next()) {
                (None, None) => return true,
                (Some("*"), Some(_)) => {}
                (Some(p), Some(e)) if p == e => {}
                _ => return false,
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A named subscription to event patterns.
#[derive(Debug, Clone)]
pub struct Subscription {
    pub id: String,
    pub patterns: Vec<EventPattern>,
}

impl Subscription {
    pub fn new(id: impl Into<String>, patterns: &[&str]) -> Self {
        Self {
            id: id.into(),
            patterns: patterns.iter().map(|p| EventPattern::new(*p)).collect(),
        }
    }

    /// Check if any pattern matches the event
    fn matches(&self, event_name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(event_name))
    }
}

/// Routes store events to matching subscribers.
///
/// Publishing is synchronous and never blocks; a dropped receiver simply
/// stops receiving.
#[derive(Clone, Default)]
pub struct EventBus {
    subscribers: Arc<RwLock<HashMap<String, (Subscription, EventSender)>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to events matching the given patterns.
    /// Returns a receiver for events.
    pub fn subscribe(&self, subscription: Subscription) -> EventReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = subscription.id.clone();

        let mut subs = self.subscribers.write().unwrap_or_else(|e| e.into_inner());
        subs.insert(id, (subscription, tx));

        rx
    }

    /// Unsubscribe from events
    pub fn unsubscribe(&self, id: &str) {
        let mut subs = self.subscribers.write().unwrap_or_else(|e| e.into_inner());
        subs.remove(id);
    }

    /// Publish an event to all matching subscribers
    pub fn publish(&self, event: StoreEvent) {
        let event_name = event.name();
        let subs = self.subscribers.read().unwrap_or_else(|e| e.into_inner());
        for (subscription, tx) in subs.values() {
            if subscription.matches(&event_name) {
                let _ = tx.send(event.clone());
            }
        }
    }

    /// Get count of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;
