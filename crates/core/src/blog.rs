// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Blog post records

use serde::{Deserialize, Serialize};

/// A blog post. `content` is free text with literal newline paragraph
/// breaks; `date` and `read_time` are opaque display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub date: String,
    pub image_url: String,
    pub read_time: String,
}
