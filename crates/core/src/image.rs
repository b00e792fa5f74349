// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Display URL normalization for entity images
//!
//! The admin panel stores whatever link the author pastes. Google Drive
//! share links and Unsplash pages do not serve a raw image, so consumers
//! rewrite stored URLs through [`display_url`] before rendering.

/// Rewrite a stored image URL into one an image tag can load, sized to
/// `size` pixels on the long edge. Unknown hosts pass through unchanged.
pub fn display_url(url: &str, size: u32) -> String {
    if url.is_empty() {
        return String::new();
    }
    let clean = unwrap_google_redirect(url);
    if clean.contains("drive.google.com") || clean.contains("docs.google.com") {
        if let Some(id) = file_id_run(&clean) {
            return format!("https://lh3.googleusercontent.com/d/{id}=s{size}");
        }
    }
    if clean.contains("images.unsplash.com") {
        return set_query_param(&clean, "w", &size.to_string());
    }
    clean
}

/// `google.com/url?q=<target>` wrappers carry the real link
/// percent-encoded in the `q` parameter.
fn unwrap_google_redirect(url: &str) -> String {
    if !url.contains("google.com/url?") {
        return url.to_string();
    }
    let Some((_, query)) = url.split_once('?') else {
        return url.to_string();
    };
    for pair in query.split('&') {
        if let Some(value) = pair.strip_prefix("q=") {
            return percent_decode(value);
        }
    }
    url.to_string()
}

/// Drive file ids are the first run of 25 or more id characters in the
/// link.
fn file_id_run(url: &str) -> Option<&str> {
    let bytes = url.as_bytes();
    let mut run_start = 0;
    for i in 0..=bytes.len() {
        let in_run = i < bytes.len()
            && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_' || bytes[i] == b'-');
        if !in_run {
            if i - run_start >= 25 {
                return Some(&url[run_start..i]);
            }
            run_start = i + 1;
        }
    }
    None
}

/// Set (or append) a single query parameter, preserving the others.
fn set_query_param(url: &str, key: &str, value: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return format!("{url}?{key}={value}");
    };
    let mut pairs: Vec<String> = Vec::new();
    let mut replaced = false;
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let name = pair.split('=').next().unwrap_or(pair);
        if name == key {
            pairs.push(format!("{key}={value}"));
            replaced = true;
        } else {
            pairs.push(pair.to_string());
        }
    }
    if !replaced {
        pairs.push(format!("{key}={value}"));
    }
    format!("{base}?{}", pairs.join("&"))
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                out.push(hi * 16 + lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
