//! Parsing helpers for supplier spreadsheet cells.
//!
//! Suppliers write pack sizes and bonus deals as free text ("10x10", "24s",
//! "10+2", "Bonus 20%"). The ingestion layer uses these to fill the numeric
//! fields on [`SupplierOffer`](crate::model::SupplierOffer) before rows
//! reach the engine.

use regex::Regex;
use std::sync::OnceLock;

fn multiplied_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)\s*[x*]\s*(\d+)").expect("static regex is valid"))
}

fn digits_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)").expect("static regex is valid"))
}

fn bonus_plus_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(\d+)\s*[+/]\s*(\d+)").expect("static regex is valid"))
}

fn bonus_percent_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)bonus\s*(\d+)\s*%").expect("static regex is valid"))
}

/// Infer an integer pack size from a free-text cell.
///
/// `"10x10"` means 10 strips of 10 units, so 100; `"24s"` is 24; a bare
/// `"100ml"` reads as 100. Unparseable or empty cells default to a single
/// unit rather than rejecting the row.
#[must_use]
pub fn parse_pack_size(cell: &str) -> u32 {
    let s = cell.trim().to_lowercase();
    if s.is_empty() {
        return 1;
    }
    if let Some(cap) = multiplied_re().captures(&s) {
        let a: u32 = cap[1].parse().unwrap_or(1);
        let b: u32 = cap[2].parse().unwrap_or(1);
        return a.saturating_mul(b).max(1);
    }
    if let Some(cap) = digits_re().captures(&s) {
        if let Ok(n) = cap[1].parse::<u32>() {
            return n.max(1);
        }
    }
    1
}

/// Infer bonus units from a free-text deal cell.
///
/// `"10+2"` grants 2 free units on the line; `"Bonus 20%"` grants a fifth
/// of the pack size, rounded to the nearest unit. Anything else is no
/// bonus.
#[must_use]
pub fn parse_bonus_quantity(cell: &str, pack_size: u32) -> u32 {
    let s = cell.trim();
    if s.is_empty() {
        return 0;
    }
    if let Some(cap) = bonus_plus_re().captures(s) {
        return cap[2].parse().unwrap_or(0);
    }
    if let Some(cap) = bonus_percent_re().captures(s) {
        let percent: f64 = cap[1].parse().unwrap_or(0.0);
        return (f64::from(pack_size) * percent / 100.0).round() as u32;
    }
    0
}
