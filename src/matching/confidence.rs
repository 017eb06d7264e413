//! Confidence tier classification.

use crate::matching::config::MatchConfig;
use crate::model::ConfidenceTier;

/// Map a combined similarity score for an *eligible* candidate to a tier.
///
/// NONE is not produced here: an offer with no eligible candidate never
/// reaches classification. Anything at or above the medium cutoff that
/// misses the high cutoff is MEDIUM; eligible scores below that are LOW and
/// surface flagged for review rather than being dropped.
#[must_use]
pub fn classify(combined: u8, config: &MatchConfig) -> ConfidenceTier {
    if combined >= config.confidence_high {
        ConfidenceTier::High
    } else if combined >= config.confidence_medium {
        ConfidenceTier::Medium
    } else {
        ConfidenceTier::Low
    }
}
