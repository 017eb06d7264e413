//! Effective unit cost: the best-buy ranking key.

use crate::error::{EngineError, Result};
use crate::model::MatchResult;

/// Pack price spread over every usable base unit, bonus units included.
///
/// Bonus units reduce true per-unit cost without changing the invoiced
/// price, so they belong in the denominator or offers with bonuses would
/// rank worse than they deserve. Invalid inputs are an error, never a
/// silent default.
pub fn effective_unit_cost(pack_price: f64, pack_size: u32, bonus_quantity: u32) -> Result<f64> {
    if !pack_price.is_finite() || pack_price < 0.0 {
        return Err(EngineError::unit_cost(format!(
            "pack price {pack_price} must be a nonnegative finite number"
        )));
    }
    let total_units = u64::from(pack_size) + u64::from(bonus_quantity);
    if total_units == 0 {
        return Err(EngineError::unit_cost(
            "pack size plus bonus quantity must be at least 1",
        ));
    }
    Ok(pack_price / total_units as f64)
}

/// Indices of `results`, cheapest effective unit cost first.
///
/// Stable ascending sort, so equally priced offers keep their input order;
/// rows with no computed cost (skipped rows) are left out. Expiry-based
/// preference among ties is the presentation layer's business.
#[must_use]
pub fn best_buy_order(results: &[MatchResult]) -> Vec<usize> {
    let mut order: Vec<usize> = results
        .iter()
        .enumerate()
        .filter(|(_, r)| r.effective_unit_cost.is_some())
        .map(|(i, _)| i)
        .collect();
    order.sort_by(|&a, &b| {
        let ca = results[a].effective_unit_cost.unwrap_or(f64::INFINITY);
        let cb = results[b].effective_unit_cost.unwrap_or(f64::INFINITY);
        ca.total_cmp(&cb)
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bonus_units_lower_the_cost() {
        let euc = effective_unit_cost(100.0, 10, 2).unwrap();
        assert!((euc - 8.3333).abs() < 1e-4);

        let without_bonus = effective_unit_cost(100.0, 10, 0).unwrap();
        assert!(euc < without_bonus);
    }

    #[test]
    fn test_negative_price_rejected() {
        assert!(effective_unit_cost(-1.0, 10, 0).is_err());
    }

    #[test]
    fn test_zero_denominator_rejected() {
        assert!(effective_unit_cost(10.0, 0, 0).is_err());
    }

    #[test]
    fn test_zero_price_is_valid() {
        assert_eq!(effective_unit_cost(0.0, 5, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_best_buy_order_is_stable_ascending() {
        let mk = |cost: Option<f64>| MatchResult::unmatched(cost);
        let results = vec![mk(Some(2.0)), mk(Some(1.0)), mk(None), mk(Some(1.0))];
        assert_eq!(best_buy_order(&results), vec![1, 3, 0]);
    }
}
