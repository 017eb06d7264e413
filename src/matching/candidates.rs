//! Candidate generation and ranking against the master index.

use crate::matching::config::MatchConfig;
use crate::matching::index::{IndexedMaster, MasterIndex};
use crate::matching::similarity::{self, SubScores};
use tracing::trace;

/// One eligible master candidate for an offer, with its sub-scores.
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    /// The indexed master entry.
    pub entry: &'a IndexedMaster,
    /// The three sub-scores against the offer's normalized name.
    pub scores: SubScores,
    /// `max(min(token_sort, token_set), partial)`, the ranking key.
    pub combined: u8,
}

/// Whether sub-scores pass the acceptance rule.
///
/// Eligible when the order- and set-based measures *both* clear their
/// cutoffs, or the partial score shows one name is clearly a substring of
/// the other. A single blended cutoff lets short pharmaceutical names slip
/// through on shared formulation words; the two-branch rule does not.
#[must_use]
pub fn is_eligible(scores: &SubScores, config: &MatchConfig) -> bool {
    (scores.token_sort >= config.token_sort_cutoff && scores.token_set >= config.token_set_cutoff)
        || scores.partial >= config.partial_cutoff
}

/// Score every master entry against a normalized offer name and return the
/// eligible candidates, best first.
///
/// Ordering is fully deterministic: combined score descending, then item
/// code ascending. The index enumerates in item-code order, so equal-score
/// candidates keep a stable relative order without relying on hash-map
/// iteration.
#[must_use]
pub fn rank_candidates<'a>(
    normalized_offer: &str,
    index: &'a MasterIndex,
    config: &MatchConfig,
) -> Vec<ScoredCandidate<'a>> {
    let mut candidates: Vec<ScoredCandidate<'a>> = index
        .entries()
        .filter_map(|entry| {
            let scores = similarity::score(normalized_offer, &entry.normalized_name);
            if !is_eligible(&scores, config) {
                return None;
            }
            trace!(
                item_code = %entry.product.item_code,
                token_sort = scores.token_sort,
                token_set = scores.token_set,
                partial = scores.partial,
                "eligible candidate"
            );
            Some(ScoredCandidate {
                entry,
                combined: scores.combined(),
                scores,
            })
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.combined
            .cmp(&a.combined)
            .then_with(|| a.entry.product.item_code.cmp(&b.entry.product.item_code))
    });
    candidates
}
