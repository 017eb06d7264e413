//! Engine output records.

use crate::error::SkipReason;
use serde::{Deserialize, Serialize};

/// How trustworthy an automatic text match is.
///
/// Advisory metadata for the review UI, never a gate: LOW matches still
/// participate in price search, flagged for a second look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceTier {
    /// Combined score at or above the high cutoff (default 95).
    High,
    /// Combined score in the medium band (default 85–94).
    Medium,
    /// Eligible but below the medium cutoff.
    Low,
    /// Linked by a human reviewer; similarity score is not meaningful.
    Manual,
    /// No eligible candidate.
    None,
}

/// Outcome of checking the supplier-declared public price against the
/// regulated price on the matched master record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceMatchStatus {
    /// Declared and regulated prices agree within tolerance.
    Match,
    /// Both prices present but further apart than the tolerance.
    Mismatch,
    /// Either price absent, or the offer is unmatched.
    Unknown,
}

/// Engine output for one supplier offer.
///
/// Derived data: recomputed whenever the offer's link changes, never
/// independently edited. Invariant: `matched_item_code` is `None` exactly
/// when `confidence_tier` is [`ConfidenceTier::None`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Item code of the chosen master record; `None` means unmatched.
    pub matched_item_code: Option<String>,
    /// Combined similarity score, 0–100. Zero for manual links.
    pub similarity_score: u8,
    /// Identity-confidence tier for the review UI.
    pub confidence_tier: ConfidenceTier,
    /// Regulated-price compliance, orthogonal to text confidence.
    pub price_match_status: PriceMatchStatus,
    /// Pack price spread over pack size plus bonus units; the best-buy
    /// ranking key. `None` when the row's pack data was invalid.
    pub effective_unit_cost: Option<f64>,
    /// Set when the row could not be scored at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_reason: Option<SkipReason>,
}

impl MatchResult {
    /// Result for an offer with no eligible candidate.
    #[must_use]
    pub fn unmatched(effective_unit_cost: Option<f64>) -> Self {
        Self {
            matched_item_code: None,
            similarity_score: 0,
            confidence_tier: ConfidenceTier::None,
            price_match_status: PriceMatchStatus::Unknown,
            effective_unit_cost,
            skip_reason: None,
        }
    }

    /// Result for a row that failed validation and was never scored.
    #[must_use]
    pub fn skipped(reason: SkipReason) -> Self {
        Self {
            matched_item_code: None,
            similarity_score: 0,
            confidence_tier: ConfidenceTier::None,
            price_match_status: PriceMatchStatus::Unknown,
            effective_unit_cost: None,
            skip_reason: Some(reason),
        }
    }

    /// Whether the engine settled on a master record for this row.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched_item_code.is_some()
    }
}
