//! Product matching engine.
//!
//! A pure, synchronous computation over an in-memory batch: given an
//! immutable [`MasterIndex`] snapshot and a list of offer rows, it derives
//! one [`MatchResult`] per row, in order. Rows are independent of one
//! another, so the batch is scored in parallel against the shared
//! read-only index.
//!
//! # Pipeline
//!
//! raw offer row → normalize → candidate ranking → near-tie disambiguation
//! → confidence tier → price validation → unit cost → `MatchResult`.
//!
//! # Example
//!
//! ```
//! use procure_match::matching::{match_offers, MasterIndex, MatchConfig};
//! use procure_match::model::{MasterProduct, SupplierOffer};
//!
//! let config = MatchConfig::default();
//! let index = MasterIndex::build(
//!     vec![MasterProduct::new("AA-1", "Panadol 500mg Tablet 10s", "BOX", Some(4.0))],
//!     &config,
//! )?;
//! let offers = vec![SupplierOffer::new("Gulf Pharma", "2026-W08", "Panadol 500mg", 3.2, 10)];
//! let results = match_offers(&offers, &index, &config)?;
//! assert_eq!(results[0].matched_item_code.as_deref(), Some("AA-1"));
//! # Ok::<(), procure_match::EngineError>(())
//! ```

pub mod candidates;
mod config;
mod confidence;
mod disambiguate;
mod index;
pub mod normalize;
pub mod similarity;

pub use config::{MatchConfig, PHARMA_STOPWORDS};
pub use disambiguate::implied_unit;
pub use index::{extract_pack_count, IndexedMaster, MasterIndex};

use crate::error::{EngineError, Result, SkipReason};
use crate::model::{ConfidenceTier, MatchResult, SupplierOffer};
use crate::pricing::{effective_unit_cost, validate_public_price};
use candidates::rank_candidates;
use rayon::prelude::*;
use tracing::debug;

/// Match a batch of supplier offers against the master index.
///
/// Order-preserving: one result per input row, bad rows included (they come
/// back NONE-tier with a [`SkipReason`] instead of vanishing). Fatal setup
/// problems (invalid config, empty index) error out before any row is
/// touched.
pub fn match_offers(
    offers: &[SupplierOffer],
    index: &MasterIndex,
    config: &MatchConfig,
) -> Result<Vec<MatchResult>> {
    config.validate()?;
    if index.is_empty() {
        return Err(EngineError::EmptyIndex);
    }

    let results: Vec<MatchResult> = offers
        .par_iter()
        .map(|offer| match_one(offer, index, config))
        .collect();

    debug!(
        offers = offers.len(),
        matched = results.iter().filter(|r| r.is_matched()).count(),
        "matched offer batch"
    );
    Ok(results)
}

/// Match a single offer. Pure; independent of any other row.
#[must_use]
pub fn match_one(offer: &SupplierOffer, index: &MasterIndex, config: &MatchConfig) -> MatchResult {
    if let Some(reason) = validate_row(offer, config) {
        return MatchResult::skipped(reason);
    }

    // Row validation guarantees the unit-cost inputs
    let unit_cost = effective_unit_cost(offer.pack_price, offer.pack_size, offer.bonus_quantity)
        .ok();

    // Reviewer-curated aliases bypass fuzzy scoring entirely
    if let Some(entry) = index.alias_for(&offer.raw_product_name) {
        return MatchResult {
            matched_item_code: Some(entry.product.item_code.clone()),
            similarity_score: 100,
            confidence_tier: ConfidenceTier::High,
            price_match_status: validate_public_price(
                offer.declared_public_price,
                entry.product.regulated_public_price,
                config.price_tolerance,
            ),
            effective_unit_cost: unit_cost,
            skip_reason: None,
        };
    }

    let normalized = normalize::normalize_name(&offer.raw_product_name, &config.stopwords);
    let ranked = rank_candidates(&normalized, index, config);
    let Some(best) = ranked.first() else {
        return MatchResult::unmatched(unit_cost);
    };

    // Candidates within the near-tie band of the best need more than text
    let band_floor = best.combined.saturating_sub(config.near_tie_band);
    let band_len = ranked
        .iter()
        .take_while(|c| c.combined >= band_floor)
        .count();
    let chosen = if band_len > 1 {
        disambiguate::disambiguate(&ranked[..band_len], offer)
    } else {
        best
    };

    MatchResult {
        matched_item_code: Some(chosen.entry.product.item_code.clone()),
        similarity_score: chosen.combined,
        confidence_tier: confidence::classify(chosen.combined, config),
        price_match_status: validate_public_price(
            offer.declared_public_price,
            chosen.entry.product.regulated_public_price,
            config.price_tolerance,
        ),
        effective_unit_cost: unit_cost,
        skip_reason: None,
    }
}

/// Re-derive a result for an offer a human reviewer linked by hand.
///
/// The forced link takes precedence over whatever the automatic pass chose;
/// similarity stays at 0 and the tier reads `Manual` so downstream screens
/// can tell a human decision from an automatic one. Price status and unit
/// cost are recomputed against the newly linked record.
pub fn apply_manual_link(
    offer: &SupplierOffer,
    item_code: &str,
    index: &MasterIndex,
    config: &MatchConfig,
) -> Result<MatchResult> {
    config.validate()?;
    let entry = index
        .get(item_code)
        .ok_or_else(|| EngineError::UnknownItemCode(item_code.to_string()))?;

    let unit_cost = if validate_row(offer, config).is_none() {
        effective_unit_cost(offer.pack_price, offer.pack_size, offer.bonus_quantity).ok()
    } else {
        None
    };

    Ok(MatchResult {
        matched_item_code: Some(entry.product.item_code.clone()),
        similarity_score: 0,
        confidence_tier: ConfidenceTier::Manual,
        price_match_status: validate_public_price(
            offer.declared_public_price,
            entry.product.regulated_public_price,
            config.price_tolerance,
        ),
        effective_unit_cost: unit_cost,
        skip_reason: None,
    })
}

/// Per-row validation. `None` means the row is scoreable.
fn validate_row(offer: &SupplierOffer, config: &MatchConfig) -> Option<SkipReason> {
    if !offer.pack_price.is_finite() {
        return Some(SkipReason::NonFinitePackPrice);
    }
    if offer.pack_price < 0.0 {
        return Some(SkipReason::NegativePackPrice);
    }
    if offer.pack_size < 1 {
        return Some(SkipReason::InvalidPackSize);
    }
    if normalize::normalize_name(&offer.raw_product_name, &config.stopwords).is_empty() {
        return Some(SkipReason::EmptyProductName);
    }
    None
}
