//! Canonical grouping keys derived from display titles.

use std::sync::LazyLock;

use regex::Regex;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s\-&>]+").expect("valid disallowed-chars regex"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Canonicalizes a title into the key used for deduplication.
///
/// Lower-cases, drops everything except ASCII letters, digits, whitespace,
/// `-`, `&` and `>`, collapses whitespace runs and trims. Absent or empty
/// input yields `""`; callers pick their own fallback.
#[must_use]
pub fn normalize_title(title: Option<&str>) -> String {
    let Some(title) = title.filter(|t| !t.is_empty()) else {
        return String::new();
    };
    let lowered = title.to_lowercase();
    let stripped = DISALLOWED.replace_all(&lowered, "");
    WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
