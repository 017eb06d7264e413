//! Unified error types for the matching engine.
//!
//! Fatal setup problems (bad thresholds, empty catalog) are surfaced as
//! [`EngineError`] before any matching begins. Per-row data problems are
//! deliberately *not* errors: a row that cannot be scored still produces a
//! [`MatchResult`](crate::model::MatchResult) carrying a [`SkipReason`], so
//! the output sequence always lines up with the input sequence.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for engine operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EngineError {
    /// Configuration errors: thresholds out of range, inverted confidence
    /// bands, negative tolerance. Fatal; checked before matching starts.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The master catalog contains no products, so no match can ever succeed.
    #[error("Master index is empty")]
    EmptyIndex,

    /// A manual link referenced an item code absent from the master index.
    #[error("Unknown item code: {0}")]
    UnknownItemCode(String),

    /// Unit-cost inputs that cannot produce a meaningful cost.
    #[error("Invalid unit cost input: {0}")]
    UnitCost(String),
}

impl EngineError {
    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a unit-cost error.
    pub fn unit_cost(message: impl Into<String>) -> Self {
        Self::UnitCost(message.into())
    }
}

/// Why a particular offer row was skipped rather than scored.
///
/// Reported per row inside the row's `MatchResult`; never aborts the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkipReason {
    /// `pack_price` was negative.
    NegativePackPrice,
    /// `pack_price` was NaN or infinite.
    NonFinitePackPrice,
    /// `pack_size` was below 1.
    InvalidPackSize,
    /// The product name normalized to nothing (blank or punctuation-only).
    EmptyProductName,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativePackPrice => write!(f, "negative pack price"),
            Self::NonFinitePackPrice => write!(f, "non-finite pack price"),
            Self::InvalidPackSize => write!(f, "pack size below 1"),
            Self::EmptyProductName => write!(f, "empty product name"),
        }
    }
}

/// Convenient Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::config("partial cutoff 120 exceeds 100");
        assert!(err.to_string().contains("Invalid configuration"));

        let err = EngineError::UnknownItemCode("ABC-1".to_string());
        assert!(err.to_string().contains("ABC-1"));
    }

    #[test]
    fn test_skip_reason_serializes_screaming() {
        let json = serde_json::to_string(&SkipReason::NegativePackPrice).unwrap();
        assert_eq!(json, "\"NEGATIVE_PACK_PRICE\"");
    }
}
