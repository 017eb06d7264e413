//! Supplier offer rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One priced line from one supplier price-list upload.
///
/// Quantities are in the supplier's own pack terms: `pack_price` buys one
/// pack of `pack_size` base units, and `bonus_quantity` extra base units
/// arrive free of charge. Immutable once ingested; the match link derived
/// for it lives in the corresponding [`MatchResult`](super::MatchResult).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierOffer {
    /// Supplier display name.
    pub supplier_name: String,
    /// Batch identifier of the upload this row came from.
    pub list_tag: String,
    /// Product name exactly as the supplier wrote it.
    pub raw_product_name: String,
    /// Invoiced price for one pack.
    pub pack_price: f64,
    /// Base units per pack, at least 1 for a valid row.
    pub pack_size: u32,
    /// Free base units included with the pack.
    #[serde(default)]
    pub bonus_quantity: u32,
    /// Public selling price the supplier claims applies to this product.
    #[serde(default)]
    pub declared_public_price: Option<f64>,
    /// Expiry of the offered stock, when the supplier discloses it.
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
}

impl SupplierOffer {
    /// Minimal constructor; bonus, declared price and expiry default to none.
    pub fn new(
        supplier_name: impl Into<String>,
        list_tag: impl Into<String>,
        raw_product_name: impl Into<String>,
        pack_price: f64,
        pack_size: u32,
    ) -> Self {
        Self {
            supplier_name: supplier_name.into(),
            list_tag: list_tag.into(),
            raw_product_name: raw_product_name.into(),
            pack_price,
            pack_size,
            bonus_quantity: 0,
            declared_public_price: None,
            expiry_date: None,
        }
    }

    /// Set the free-unit bonus.
    #[must_use]
    pub fn with_bonus(mut self, bonus_quantity: u32) -> Self {
        self.bonus_quantity = bonus_quantity;
        self
    }

    /// Set the supplier-declared public selling price.
    #[must_use]
    pub fn with_declared_public_price(mut self, price: f64) -> Self {
        self.declared_public_price = Some(price);
        self
    }

    /// Set the stock expiry date.
    #[must_use]
    pub fn with_expiry(mut self, expiry: NaiveDate) -> Self {
        self.expiry_date = Some(expiry);
        self
    }
}
