//! Core data model: master catalog entries, supplier offer rows, and the
//! match results the engine derives from them.

mod master;
mod offer;
mod result;

pub use master::MasterProduct;
pub use offer::SupplierOffer;
pub use result::{ConfidenceTier, MatchResult, PriceMatchStatus};
