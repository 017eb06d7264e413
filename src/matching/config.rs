//! Matching configuration: acceptance cutoffs, confidence bands, the
//! near-tie band for disambiguation, price tolerance, and the domain
//! stopword list.

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Formulation, packaging and unit words that carry no product identity.
///
/// Removed as whole tokens before scoring so that "Lantus Syrup" and
/// "Actifed Syrup" do not match each other on "syrup" alone. Numeric
/// strength tokens like "500mg" survive because they never equal a bare
/// unit word.
pub const PHARMA_STOPWORDS: &[&str] = &[
    // Dosage forms
    "tablet", "tablets", "tab", "tabs", "capsule", "capsules", "cap", "caps", "syrup", "syrups",
    "suspension", "suspensions", "injection", "injections", "inj", "solution", "solutions", "sol",
    "cream", "creams", "ointment", "ointments", "gel", "gels", "lotion", "lotions", "drops",
    "drop", "spray", "sprays", "powder", "powders", "granules", "granule", "sachet", "sachets",
    "vial", "vials", "ampoule", "ampoules", "ampule", "ampules", "inhaler", "inhalers",
    "suppository", "suppositories", "supp", "patch", "patches", "film", "films",
    // Packaging terms
    "bottle", "bottles", "btl", "box", "boxes", "blister", "blisters", "strip", "strips", "tube",
    "tubes", "pack", "packs", "jar", "jars",
    // Low-value descriptors
    "mg", "ml", "gm", "mcg", "iu", "per", "each", "unit", "units",
];

/// Configuration for one matching batch.
///
/// Pharmaceutical names are short and share many formulation words, so the
/// default cutoffs are deliberately strict compared to a generic fuzzy
/// matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Minimum token-sort score for the AND branch of acceptance.
    pub token_sort_cutoff: u8,
    /// Minimum token-set score for the AND branch of acceptance.
    pub token_set_cutoff: u8,
    /// Minimum partial score for the substring branch of acceptance.
    pub partial_cutoff: u8,
    /// Combined score at or above which a match is HIGH confidence.
    pub confidence_high: u8,
    /// Combined score at or above which a match is MEDIUM confidence.
    pub confidence_medium: u8,
    /// Candidates within this many points of the best are near-ties and go
    /// through the disambiguator.
    pub near_tie_band: u8,
    /// Absolute currency tolerance for declared-vs-regulated price checks.
    /// Sized to absorb rounding, not real price drift.
    pub price_tolerance: f64,
    /// Whole-token stopwords removed during normalization.
    pub stopwords: BTreeSet<String>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            token_sort_cutoff: 85,
            token_set_cutoff: 85,
            partial_cutoff: 90,
            confidence_high: 95,
            confidence_medium: 85,
            near_tie_band: 2,
            price_tolerance: 0.01,
            stopwords: PHARMA_STOPWORDS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl MatchConfig {
    /// Stricter cutoffs for review-free automated linking.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            token_sort_cutoff: 92,
            token_set_cutoff: 92,
            partial_cutoff: 95,
            ..Self::default()
        }
    }

    /// Looser cutoffs for exploratory runs where a human reviews every row.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            token_sort_cutoff: 70,
            token_set_cutoff: 75,
            partial_cutoff: 85,
            confidence_medium: 75,
            ..Self::default()
        }
    }

    /// Replace the stopword list.
    #[must_use]
    pub fn with_stopwords<I, S>(mut self, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = stopwords.into_iter().map(Into::into).collect();
        self
    }

    /// The lowest combined score an eligible candidate can carry, given the
    /// acceptance rule. Used as the floor of the LOW confidence band.
    #[must_use]
    pub fn acceptance_floor(&self) -> u8 {
        self.token_sort_cutoff
            .min(self.token_set_cutoff)
            .min(self.partial_cutoff)
    }

    /// Check the configuration before any matching begins.
    ///
    /// A broken setup is a fatal [`EngineError::Config`], unlike bad data
    /// rows which are reported per row.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("token_sort_cutoff", self.token_sort_cutoff),
            ("token_set_cutoff", self.token_set_cutoff),
            ("partial_cutoff", self.partial_cutoff),
            ("confidence_high", self.confidence_high),
            ("confidence_medium", self.confidence_medium),
        ] {
            if value > 100 {
                return Err(EngineError::config(format!(
                    "{name} is {value}, must be within 0-100"
                )));
            }
        }
        if self.confidence_medium > self.confidence_high {
            return Err(EngineError::config(format!(
                "confidence_medium ({}) exceeds confidence_high ({})",
                self.confidence_medium, self.confidence_high
            )));
        }
        if !self.price_tolerance.is_finite() || self.price_tolerance < 0.0 {
            return Err(EngineError::config(format!(
                "price_tolerance {} must be a nonnegative finite number",
                self.price_tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        assert!(MatchConfig::default().validate().is_ok());
        assert!(MatchConfig::strict().validate().is_ok());
        assert!(MatchConfig::lenient().validate().is_ok());
    }

    #[test]
    fn test_inverted_confidence_bands_rejected() {
        let config = MatchConfig {
            confidence_high: 80,
            confidence_medium: 90,
            ..MatchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let config = MatchConfig {
            price_tolerance: -0.5,
            ..MatchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_acceptance_floor_is_min_cutoff() {
        assert_eq!(MatchConfig::default().acceptance_floor(), 85);
        assert_eq!(MatchConfig::lenient().acceptance_floor(), 70);
    }

    #[test]
    fn test_stopwords_contain_dosage_forms() {
        let config = MatchConfig::default();
        assert!(config.stopwords.contains("syrup"));
        assert!(config.stopwords.contains("tablet"));
        assert!(!config.stopwords.contains("panadol"));
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = MatchConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.partial_cutoff, config.partial_cutoff);
        assert_eq!(back.stopwords, config.stopwords);
    }
}
