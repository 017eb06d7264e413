//! Hybrid string similarity scoring.
//!
//! Three sub-scores, each an integer 0-100, computed for a pair of
//! normalized names:
//!
//! - **token-sort**: tokens of each side sorted and rejoined, then an
//!   edit-distance ratio. Catches reordered names.
//! - **token-set**: built from the token intersection and the two
//!   difference sets, so duplicates and word order never penalize.
//! - **partial**: the best-aligned window of the shorter string inside the
//!   longer one, scored as if they were the same length. Catches "offer
//!   name is a prefix/fragment of the catalog name".
//!
//! Scoring is a pure function of the two inputs. Acceptance is decided
//! per sub-score by the candidate matcher, not here; this module returns
//! all three.

use std::collections::BTreeSet;
use strsim::generic_levenshtein;

/// The three sub-scores for one (offer, candidate) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubScores {
    /// Sorted-token edit-distance ratio.
    pub token_sort: u8,
    /// Intersection/difference set ratio.
    pub token_set: u8,
    /// Best-window substring ratio.
    pub partial: u8,
}

impl SubScores {
    /// Combined score used for ranking and confidence: the better of
    /// "order- and set-based measures both agree" and "one side is clearly
    /// a substring of the other".
    #[must_use]
    pub fn combined(&self) -> u8 {
        self.token_sort.min(self.token_set).max(self.partial)
    }
}

/// Score two normalized strings.
#[must_use]
pub fn score(a: &str, b: &str) -> SubScores {
    SubScores {
        token_sort: token_sort_ratio(a, b),
        token_set: token_set_ratio(a, b),
        partial: partial_ratio(a, b),
    }
}

/// Plain edit-distance ratio over characters, 0-100.
///
/// 100 only for identical strings; 0 when exactly one side is empty. Two
/// empty strings score 100 (vacuously identical), though the engine never
/// feeds those through: empty names are rejected during row validation.
fn ratio(a: &[char], b: &[char]) -> u8 {
    if a.is_empty() && b.is_empty() {
        return 100;
    }
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let distance = generic_levenshtein(&a.to_vec(), &b.to_vec());
    let max_len = a.len().max(b.len());
    scale(1.0 - distance as f64 / max_len as f64)
}

fn ratio_str(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio(&a, &b)
}

fn scale(fraction: f64) -> u8 {
    (fraction.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Sort each side's tokens alphabetically, join, and take the edit ratio.
fn token_sort_ratio(a: &str, b: &str) -> u8 {
    ratio_str(&sorted_tokens(a), &sorted_tokens(b))
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Token-set ratio: compare the shared-token core against each side's
/// core-plus-extras, and the two extended forms against each other, keeping
/// the best. A side whose tokens are a subset of the other's scores 100.
fn token_set_ratio(a: &str, b: &str) -> u8 {
    let set_a: BTreeSet<&str> = a.split_whitespace().collect();
    let set_b: BTreeSet<&str> = b.split_whitespace().collect();

    let core: Vec<&str> = set_a.intersection(&set_b).copied().collect();
    let only_a: Vec<&str> = set_a.difference(&set_b).copied().collect();
    let only_b: Vec<&str> = set_b.difference(&set_a).copied().collect();

    let core_str = core.join(" ");
    let a_str = join_nonempty(&core_str, &only_a.join(" "));
    let b_str = join_nonempty(&core_str, &only_b.join(" "));

    if core_str.is_empty() {
        // No shared tokens: fall back to comparing the two sides directly
        return ratio_str(&a_str, &b_str);
    }

    ratio_str(&core_str, &a_str)
        .max(ratio_str(&core_str, &b_str))
        .max(ratio_str(&a_str, &b_str))
}

fn join_nonempty(left: &str, right: &str) -> String {
    match (left.is_empty(), right.is_empty()) {
        (true, _) => right.to_string(),
        (_, true) => left.to_string(),
        _ => format!("{left} {right}"),
    }
}

/// Best-aligned window of the shorter string inside the longer one.
///
/// Slides a window the length of the shorter string across the longer and
/// keeps the best edit ratio, so a fragment embedded in a longer catalog
/// name scores as if the two were the same length.
fn partial_ratio(a: &str, b: &str) -> u8 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let (shorter, longer) = if a_chars.len() <= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    if shorter.is_empty() {
        return if longer.is_empty() { 100 } else { 0 };
    }
    if shorter.len() == longer.len() {
        return ratio(shorter, longer);
    }

    let mut best = 0u8;
    for window in longer.windows(shorter.len()) {
        let r = ratio(shorter, window);
        if r > best {
            best = r;
            if best == 100 {
                break;
            }
        }
    }
    best
}
