// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ID generation abstractions

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Generates unique identifiers
pub trait IdGen: Clone + Send + Sync {
    fn next(&self) -> String;
}

/// Timestamp-derived ID generator for production use.
///
/// Ids are the current Unix-epoch milliseconds, the scheme the storefront
/// has always used for client-generated entities. A monotonic guard keeps
/// two calls inside the same millisecond from colliding.
#[derive(Clone, Default)]
pub struct TimestampIdGen {
    last: Arc<Mutex<i64>>,
}

impl TimestampIdGen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGen for TimestampIdGen {
    fn next(&self) -> String {
        let now = chrono::Utc::now().timestamp_millis();
        let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());
        let id = if now > *last { now } else { *last + 1 };
        *last = id;
        id.to_string()
    }
}

/// Sequential ID generator for testing
#[derive(Clone)]
pub struct SequentialIdGen {
    prefix: String,
    counter: Arc<AtomicU64>,
}

impl SequentialIdGen {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl Default for SequentialIdGen {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGen for SequentialIdGen {
    fn next(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        format!("{}-{}", self.prefix, n)
    }
}
