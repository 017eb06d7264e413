//! Regulated public-price validation.

use crate::model::PriceMatchStatus;

/// Guard against binary-float noise around the tolerance boundary, so a
/// declared 25.00 against a regulated 25.01 lands exactly on MATCH.
const FLOAT_GUARD: f64 = 1e-9;

/// Compare a supplier-declared public price against the regulated price on
/// the matched master record.
///
/// Absolute currency tolerance, not a percentage: the check absorbs
/// rounding differences, never real price drift. Unknown when either side
/// is absent; the caller also reports Unknown for unmatched offers, where
/// there is no master record to compare against. Orthogonal to text
/// confidence: a HIGH-confidence match can still MISMATCH on price.
#[must_use]
pub fn validate_public_price(
    declared: Option<f64>,
    regulated: Option<f64>,
    tolerance: f64,
) -> PriceMatchStatus {
    match (declared, regulated) {
        (Some(declared), Some(regulated)) => {
            if (declared - regulated).abs() <= tolerance + FLOAT_GUARD {
                PriceMatchStatus::Match
            } else {
                PriceMatchStatus::Mismatch
            }
        }
        _ => PriceMatchStatus::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_boundary_is_a_match() {
        assert_eq!(
            validate_public_price(Some(25.00), Some(25.01), 0.01),
            PriceMatchStatus::Match
        );
    }

    #[test]
    fn test_just_past_boundary_mismatches() {
        assert_eq!(
            validate_public_price(Some(25.00), Some(25.02), 0.01),
            PriceMatchStatus::Mismatch
        );
    }

    #[test]
    fn test_equal_prices_match() {
        assert_eq!(
            validate_public_price(Some(9.75), Some(9.75), 0.01),
            PriceMatchStatus::Match
        );
    }

    #[test]
    fn test_missing_either_side_is_unknown() {
        assert_eq!(
            validate_public_price(None, Some(25.0), 0.01),
            PriceMatchStatus::Unknown
        );
        assert_eq!(
            validate_public_price(Some(25.0), None, 0.01),
            PriceMatchStatus::Unknown
        );
        assert_eq!(
            validate_public_price(None, None, 0.01),
            PriceMatchStatus::Unknown
        );
    }
}
