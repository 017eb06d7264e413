//! Near-tie disambiguation.
//!
//! Master lists routinely carry several pack variants of one drug (10-tablet
//! and 100-tablet boxes) whose names are textually near-identical, so text
//! similarity alone cannot pick between them. When two or more eligible
//! candidates land within the near-tie band of the best score, the pack
//! description and price signals decide, in a fixed order, ending on a
//! lexicographic fallback so repeated runs agree.

use crate::matching::candidates::ScoredCandidate;
use crate::model::SupplierOffer;
use tracing::trace;

/// Packaging words an offer's raw name may carry, mapped to the unit-of-issue
/// vocabulary used by master catalogs.
const UNIT_WORDS: &[(&str, &str)] = &[
    ("vial", "VIAL"),
    ("vials", "VIAL"),
    ("box", "BOX"),
    ("boxes", "BOX"),
    ("bottle", "BOTTLE"),
    ("bottles", "BOTTLE"),
    ("btl", "BOTTLE"),
    ("ampoule", "AMPOULE"),
    ("ampoules", "AMPOULE"),
    ("ampule", "AMPOULE"),
    ("ampules", "AMPOULE"),
    ("amp", "AMPOULE"),
    ("tube", "TUBE"),
    ("tubes", "TUBE"),
    ("sachet", "SACHET"),
    ("sachets", "SACHET"),
    ("strip", "STRIP"),
    ("strips", "STRIP"),
    ("jar", "JAR"),
    ("jars", "JAR"),
];

/// Unit of issue implied by an offer's raw pack description, if any.
#[must_use]
pub fn implied_unit(raw_name: &str) -> Option<&'static str> {
    let folded = raw_name.to_lowercase();
    folded
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .find_map(|token| {
            UNIT_WORDS
                .iter()
                .find(|(word, _)| *word == token)
                .map(|(_, unit)| *unit)
        })
}

/// Pick one candidate out of a near-tie band.
///
/// `band` must be nonempty and ordered best-first (combined score
/// descending, item code ascending). Tie-break order:
///
/// 1. pack-description signal: unit of issue implied by the offer's raw
///    name, then the pack count advertised in the master name against the
///    offer's `pack_size`;
/// 2. regulated price nearest the offer's declared public price;
/// 3. the band's own deterministic order (lexicographically smallest item
///    code among the top scores).
#[must_use]
pub fn disambiguate<'a, 'b>(
    band: &'b [ScoredCandidate<'a>],
    offer: &SupplierOffer,
) -> &'b ScoredCandidate<'a> {
    debug_assert!(!band.is_empty());
    let mut pool: Vec<&ScoredCandidate<'a>> = band.iter().collect();

    // Signal 1a: unit of issue named in the offer's pack description
    if let Some(unit) = implied_unit(&offer.raw_product_name) {
        let unit_matches: Vec<&ScoredCandidate<'a>> = pool
            .iter()
            .copied()
            .filter(|c| c.entry.unit_of_issue == unit)
            .collect();
        if !unit_matches.is_empty() {
            trace!(unit, narrowed = unit_matches.len(), "unit signal applied");
            pool = unit_matches;
        }
    }
    if let [single] = pool.as_slice() {
        return *single;
    }

    // Signal 1b: pack count in the master name vs the offer's pack size
    let pack_matches: Vec<&ScoredCandidate<'a>> = pool
        .iter()
        .copied()
        .filter(|c| c.entry.pack_count == Some(offer.pack_size))
        .collect();
    if !pack_matches.is_empty() {
        trace!(
            pack_size = offer.pack_size,
            narrowed = pack_matches.len(),
            "pack-count signal applied"
        );
        pool = pack_matches;
    }
    if let [single] = pool.as_slice() {
        return *single;
    }

    // Signal 2: regulated price closest to the declared public price
    if let Some(declared) = offer.declared_public_price {
        let nearest = pool
            .iter()
            .copied()
            .filter(|c| c.entry.product.regulated_public_price.is_some())
            .min_by(|a, b| {
                let da = price_distance(declared, a);
                let db = price_distance(declared, b);
                da.total_cmp(&db)
            });
        if let Some(candidate) = nearest {
            trace!(
                item_code = %candidate.entry.product.item_code,
                "price-proximity signal applied"
            );
            return candidate;
        }
    }

    // Fallback: the band is already ordered deterministically
    pool[0]
}

fn price_distance(declared: f64, candidate: &ScoredCandidate<'_>) -> f64 {
    candidate
        .entry
        .product
        .regulated_public_price
        .map_or(f64::INFINITY, |regulated| (declared - regulated).abs())
}
