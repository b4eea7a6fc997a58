//! Extraction of series ids from the website's search results page.
//!
//! The page is scanned for the anchor markup its series links use; the
//! numeric id is the only thing taken, all other markup is ignored. Kept
//! behind this seam so a real HTML parser could replace the regex without
//! touching the client contract.

use regex::Regex;
use std::sync::OnceLock;

fn anchor_regex() -> Option<&'static Regex> {
    static INSTANCE: OnceLock<Option<Regex>> = OnceLock::new();
    INSTANCE
        .get_or_init(|| Regex::new(r#"<a href="/\?tab=series&amp;id=(\d+)&amp;lid=\d*">"#).ok())
        .as_ref()
}

/// Candidate series ids in document order. Duplicates are kept; the caller
/// owns dedup policy.
#[must_use]
pub fn series_ids(page: &str) -> Vec<&str> {
    let Some(re) = anchor_regex() else {
        return Vec::new();
    };
    re.captures_iter(page)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect()
}
