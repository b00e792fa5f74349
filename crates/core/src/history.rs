// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Brand history timeline records

use serde::{Deserialize, Serialize};

/// One milestone on the brand's history timeline. Ordering is the array
/// order of the collection; `year` is a display string, not a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEvent {
    pub id: String,
    pub year: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
}
