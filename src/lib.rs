//! **Product matching and price validation for pharmaceutical procurement.**
//!
//! `procure-match` reconciles heterogeneous supplier price-offer rows
//! against a canonical master product catalog so a buyer can rank offers by
//! true per-unit cost. It is the matching core of a procurement workflow:
//! spreadsheet ingestion, persistence and dashboards live outside and talk
//! to it through three calls.
//!
//! ## How a row is matched
//!
//! 1. **Normalize**: names are case-folded, stripped of punctuation, and
//!    cleared of domain stopwords (dosage forms, packaging words) that would
//!    otherwise dominate similarity without indicating identity.
//! 2. **Score**: each catalog entry gets three 0-100 sub-scores —
//!    token-sort, token-set, and partial (best-window substring).
//! 3. **Accept**: a candidate is eligible only if both token scores clear
//!    their cutoffs, or the partial score shows a clean substring
//!    relationship. Short drug names share too many formulation words for a
//!    single blended cutoff to be safe.
//! 4. **Disambiguate**: near-tied pack variants ("10s" vs "100s" boxes) are
//!    separated by pack-description and price signals, with a
//!    lexicographic fallback for reproducibility.
//! 5. **Classify, validate, cost**: the winner gets a confidence tier, the
//!    declared public price is checked against the regulated price, and the
//!    pack price is spread over all usable units (bonus included) to give
//!    the best-buy ranking key.
//!
//! ## Getting started
//!
//! ```
//! use procure_match::matching::{match_offers, MasterIndex, MatchConfig};
//! use procure_match::model::{MasterProduct, SupplierOffer};
//! use procure_match::pricing::best_buy_order;
//!
//! fn main() -> procure_match::Result<()> {
//!     let config = MatchConfig::default();
//!     let index = MasterIndex::build(
//!         vec![
//!             MasterProduct::new("AA-1", "Panadol 500mg Tablet 10s", "BOX", Some(4.0)),
//!             MasterProduct::new("MM-5", "Panadol 500mg Tablet 100s", "BOX", Some(32.0)),
//!         ],
//!         &config,
//!     )?;
//!
//!     let offers = vec![
//!         SupplierOffer::new("Gulf Pharma", "2026-W08", "Panadol 500mg", 3.4, 10),
//!         SupplierOffer::new("Delta Med", "2026-W08", "Panadol 500mg", 3.0, 10).with_bonus(2),
//!     ];
//!     let results = match_offers(&offers, &index, &config)?;
//!
//!     // The bonus deal wins: 3.0 / 12 units beats 3.4 / 10
//!     let order = best_buy_order(&results);
//!     assert_eq!(order[0], 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency
//!
//! The engine is pure and synchronous. The [`matching::MasterIndex`] is
//! immutable and `Send + Sync`: build it once per master-list upload, share
//! it behind an `Arc`, and publish a rebuild by swapping the `Arc` so
//! in-flight batches keep their snapshot. Offer rows are independent, so
//! batches are scored in parallel internally.

pub mod error;
pub mod matching;
pub mod model;
pub mod pricing;

pub use error::{EngineError, Result, SkipReason};
pub use matching::{apply_manual_link, match_offers, MasterIndex, MatchConfig};
pub use model::{ConfidenceTier, MasterProduct, MatchResult, PriceMatchStatus, SupplierOffer};
