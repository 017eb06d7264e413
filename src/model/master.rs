//! Master catalog entries.

use serde::{Deserialize, Serialize};

/// One entry of the canonical master product catalog.
///
/// Replaced wholesale on each master-list upload; the matching engine only
/// ever reads these. Derived data (normalized names, pack-count signals)
/// lives in the [`MasterIndex`](crate::matching::MasterIndex) built from
/// them, not on the record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterProduct {
    /// Unique catalog key, e.g. `"PAN-500-10"`.
    pub item_code: String,
    /// Raw product name as it appears in the uploaded master list.
    pub product_name: String,
    /// Unit of issue, e.g. `"BOX"`, `"VIAL"`, `"BOTTLE"`.
    pub unit_of_issue: String,
    /// Regulator-fixed public selling price, when published.
    pub regulated_public_price: Option<f64>,
}

impl MasterProduct {
    /// Convenience constructor for a fully specified entry.
    pub fn new(
        item_code: impl Into<String>,
        product_name: impl Into<String>,
        unit_of_issue: impl Into<String>,
        regulated_public_price: Option<f64>,
    ) -> Self {
        Self {
            item_code: item_code.into(),
            product_name: product_name.into(),
            unit_of_issue: unit_of_issue.into(),
            regulated_public_price,
        }
    }
}
