//! Product-name normalization.
//!
//! Turns free-text supplier and catalog names into comparable token strings:
//! case-folded, punctuation stripped, domain stopwords removed as whole
//! tokens, whitespace collapsed. Idempotent so the engine can feed its own
//! output back in without drift.

use std::collections::BTreeSet;

/// Normalize a raw product name against a stopword set.
///
/// Numeric-strength tokens like `500mg` are kept: strength is part of
/// product identity, while a bare `mg` or `tablet` is not. If removing
/// stopwords would empty the string entirely (a name made only of
/// formulation words), the pre-removal token string is returned instead so
/// the row keeps a key that cannot spuriously match everything.
#[must_use]
pub fn normalize_name(raw: &str, stopwords: &BTreeSet<String>) -> String {
    let folded = raw.to_lowercase();
    let tokens: Vec<&str> = folded
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    let kept: Vec<&str> = tokens
        .iter()
        .copied()
        .filter(|t| !stopwords.contains(*t))
        .collect();

    if kept.is_empty() {
        tokens.join(" ")
    } else {
        kept.join(" ")
    }
}

/// Split an already-normalized string into its tokens.
pub fn tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}
