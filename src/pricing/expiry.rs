//! Expiry-risk classification for offered stock.
//!
//! Presentation metadata for the review dashboard: short-dated stock is
//! flagged next to its price rank but never changes matching or ranking.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stock expiring inside this many days is high risk.
pub const RISK_HIGH_DAYS: i64 = 180;
/// Stock expiring inside this many days (but past the high band) is medium risk.
pub const RISK_MEDIUM_DAYS: i64 = 365;

/// How close to expiry the offered stock is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpiryRisk {
    /// Expired, or expiring within six months.
    High,
    /// Expiring within a year.
    Medium,
    /// More than a year of shelf life left.
    Low,
    /// Supplier disclosed no expiry date.
    Unknown,
}

/// Classify an offer's expiry date relative to a reference day.
#[must_use]
pub fn expiry_risk(expiry: Option<NaiveDate>, today: NaiveDate) -> ExpiryRisk {
    match expiry {
        None => ExpiryRisk::Unknown,
        Some(date) => {
            let days_left = (date - today).num_days();
            if days_left < RISK_HIGH_DAYS {
                ExpiryRisk::High
            } else if days_left < RISK_MEDIUM_DAYS {
                ExpiryRisk::Medium
            } else {
                ExpiryRisk::Low
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    #[test]
    fn test_risk_bands() {
        let t = today();
        assert_eq!(
            expiry_risk(t.checked_add_days(Days::new(30)), t),
            ExpiryRisk::High
        );
        assert_eq!(
            expiry_risk(t.checked_add_days(Days::new(200)), t),
            ExpiryRisk::Medium
        );
        assert_eq!(
            expiry_risk(t.checked_add_days(Days::new(400)), t),
            ExpiryRisk::Low
        );
    }

    #[test]
    fn test_already_expired_is_high() {
        let t = today();
        assert_eq!(
            expiry_risk(t.checked_sub_days(Days::new(10)), t),
            ExpiryRisk::High
        );
    }

    #[test]
    fn test_missing_expiry_is_unknown() {
        assert_eq!(expiry_risk(None, today()), ExpiryRisk::Unknown);
    }
}
