// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Display currency selection

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two parallel price tags every product carries. Switching currency
/// only changes which field is read for display; stored amounts never
/// change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "UYU")]
    Uyu,
    #[serde(rename = "USD")]
    Usd,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Uyu => write!(f, "UYU"),
            Currency::Usd => write!(f, "USD"),
        }
    }
}
