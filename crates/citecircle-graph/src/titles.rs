//! Display-title cleanup for circle labels.
//!
//! Cosmetic only: the renderer shows these strings, while matrix and angle
//! lookups keep using the raw label names.

use crate::order::{CanonicalOrder, Label};
use regex_lite::Regex;
use std::sync::LazyLock;

/// A digit-free prefix followed by a single trailing digit run, the shape of
/// `Author2020` style citation keys.
static KEY_WITH_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^0-9]+)([0-9]+)$").expect("valid literal pattern"));

/// Title for a single label.
///
/// Spacer placeholders become empty strings so they render without visible
/// text, category anchors pass through unchanged, and a citation key ending
/// in one digit run is rewritten as `"<prefix> (<digits>)"`. Everything else
/// is left alone, which also makes the rewrite idempotent: a rewritten title
/// ends in `)`, not a digit.
pub fn display_title(label: &Label) -> String {
    match label {
        Label::Placeholder(placeholder) if placeholder.is_spacer() => String::new(),
        Label::Placeholder(placeholder) => placeholder.name().to_string(),
        Label::Citation { key, .. } => format_citation_key(key),
    }
}

fn format_citation_key(key: &str) -> String {
    match KEY_WITH_YEAR.captures(key) {
        Some(caps) => format!("{} ({})", &caps[1], &caps[2]),
        None => key.to_string(),
    }
}

/// Titles for every label, aligned to the canonical order.
pub fn display_titles(order: &CanonicalOrder) -> Vec<String> {
    order.labels().iter().map(display_title).collect()
}
