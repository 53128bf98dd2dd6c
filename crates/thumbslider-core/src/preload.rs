//! Photo preloading.
//!
//! Preloading is optional: a platform may insert every photo into a hidden
//! cache so the browser fetches them before the user scrubs to them.

use crate::config::Photo;
use indexmap::IndexSet;

/// Photo URLs to preload, deduplicated in first-seen order. Empty URLs are skipped.
pub fn unique_urls(photos: &[Photo]) -> Vec<&str> {
    photos
        .iter()
        .map(|photo| photo.url.as_str())
        .filter(|url| !url.trim().is_empty())
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}
