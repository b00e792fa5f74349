// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! mariella-state: application state container for the MARIEL'LA
//! storefront core
//!
//! The single in-memory source of truth over the durable collection
//! store: hydration, every mutation operation, cart persistence, the
//! admin session, and an event bus views subscribe to for redraws.

pub mod app;
pub mod checkout;
pub mod error;
pub mod events;
pub mod export;
pub mod session;

pub use app::AppState;
pub use error::StateError;
pub use events::{EventBus, EventPattern, EventReceiver, StoreEvent, Subscription};
pub use export::SeedSnapshot;
pub use session::{AdminSession, SessionState};
