// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fair appearance records

use serde::{Deserialize, Serialize};

/// Whether a fair is announced or already happened. Author-set; never
/// derived from the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FairStatus {
    Upcoming,
    Past,
}

/// A fair or market the brand attends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fair {
    pub id: String,
    pub name: String,
    /// ISO date string, kept opaque.
    pub date: String,
    pub city: String,
    pub location: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maps_url: Option<String>,
    pub status: FairStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&FairStatus::Upcoming).unwrap(),
            "\"upcoming\""
        );
    }

    #[test]
    fn absent_optional_fields_stay_absent() {
        let fair = seed::default_fairs()
            .into_iter()
            .find(|f| f.maps_url.is_none())
            .unwrap();
        let json = serde_json::to_value(&fair).unwrap();
        assert!(json.get("mapsUrl").is_none());

        let back: Fair = serde_json::from_value(json).unwrap();
        assert_eq!(back, fair);
    }
}
