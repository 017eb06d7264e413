//! Price validation, unit-cost calculation, and the spreadsheet-cell
//! parsing helpers that feed them.

mod expiry;
mod parse;
mod unit_cost;
mod validator;

pub use expiry::{expiry_risk, ExpiryRisk, RISK_HIGH_DAYS, RISK_MEDIUM_DAYS};
pub use parse::{parse_bonus_quantity, parse_pack_size};
pub use unit_cost::{best_buy_order, effective_unit_cost};
pub use validator::validate_public_price;
