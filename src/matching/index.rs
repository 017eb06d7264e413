//! Immutable master-catalog index.
//!
//! Built once per master-list upload and shared read-only across matching
//! calls (wrap in `Arc` and swap the `Arc` to publish a rebuild atomically;
//! in-flight calls keep the old snapshot). Entries are normalized up front
//! so per-offer matching never re-tokenizes the catalog.

use crate::error::{EngineError, Result};
use crate::matching::config::MatchConfig;
use crate::matching::normalize::normalize_name;
use crate::model::MasterProduct;
use indexmap::IndexMap;
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Pack-count tokens in catalog names: "10s", "100's", "x 24".
fn pack_count_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?:\b(\d+)\s*'?s\b|\bx\s*(\d+)\b)").expect("static regex is valid")
    })
}

/// One master product plus everything precomputed for matching against it.
#[derive(Debug, Clone)]
pub struct IndexedMaster {
    /// The catalog record itself.
    pub product: MasterProduct,
    /// Stopword-normalized name used for similarity scoring.
    pub normalized_name: String,
    /// Unit of issue, upper-cased for signal comparison.
    pub unit_of_issue: String,
    /// Pack count advertised in the raw name, e.g. 10 for "... Tablet 10s".
    pub pack_count: Option<u32>,
}

/// Opaque, immutable catalog index. `Send + Sync`; share via `Arc`.
///
/// Entries are held in item-code order so candidate enumeration, and
/// therefore tie resolution, is stable across runs regardless of the order
/// products arrived in.
#[derive(Debug, Clone, Default)]
pub struct MasterIndex {
    entries: IndexMap<String, IndexedMaster>,
    aliases: IndexMap<String, String>,
}

impl MasterIndex {
    /// Build an index from a master-list upload.
    ///
    /// Normalization uses the config's stopword list, which makes the
    /// stopword set a build-time input: rebuild the index if it changes.
    /// An empty upload is a setup error, not an empty result.
    pub fn build(
        products: impl IntoIterator<Item = MasterProduct>,
        config: &MatchConfig,
    ) -> Result<Self> {
        config.validate()?;

        let mut entries: IndexMap<String, IndexedMaster> = IndexMap::new();
        for product in products {
            let normalized_name = normalize_name(&product.product_name, &config.stopwords);
            if normalized_name.is_empty() {
                warn!(
                    item_code = %product.item_code,
                    "skipping master product with empty normalized name"
                );
                continue;
            }
            let entry = IndexedMaster {
                normalized_name,
                unit_of_issue: product.unit_of_issue.trim().to_uppercase(),
                pack_count: extract_pack_count(&product.product_name),
                product: product.clone(),
            };
            if entries.insert(product.item_code.clone(), entry).is_some() {
                warn!(item_code = %product.item_code, "duplicate item code, keeping last");
            }
        }

        if entries.is_empty() {
            return Err(EngineError::EmptyIndex);
        }

        entries.sort_keys();
        debug!(products = entries.len(), "built master index");
        Ok(Self {
            entries,
            aliases: IndexMap::new(),
        })
    }

    /// Attach reviewer-curated aliases: exact raw supplier names bound to an
    /// item code, consulted before any fuzzy scoring.
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        for (alias, item_code) in aliases {
            let alias = alias.into();
            let item_code = item_code.into();
            if !self.entries.contains_key(&item_code) {
                return Err(EngineError::UnknownItemCode(item_code));
            }
            self.aliases.insert(alias.trim().to_string(), item_code);
        }
        self.aliases.sort_keys();
        Ok(self)
    }

    /// Look up an exact alias for a raw supplier name.
    #[must_use]
    pub fn alias_for(&self, raw_name: &str) -> Option<&IndexedMaster> {
        self.aliases
            .get(raw_name.trim())
            .and_then(|code| self.entries.get(code))
    }

    /// Entry for an item code, if present.
    #[must_use]
    pub fn get(&self, item_code: &str) -> Option<&IndexedMaster> {
        self.entries.get(item_code)
    }

    /// All entries, in item-code order.
    pub fn entries(&self) -> impl Iterator<Item = &IndexedMaster> {
        self.entries.values()
    }

    /// Number of indexed products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Pull a pack-count signal out of a raw product name.
///
/// Returns the last such token: names that carry several counts, like
/// "Strepsils 6s Tablet 24s", put the selling count at the end.
#[must_use]
pub fn extract_pack_count(raw_name: &str) -> Option<u32> {
    pack_count_re()
        .captures_iter(raw_name)
        .filter_map(|cap| {
            cap.get(1)
                .or_else(|| cap.get(2))
                .and_then(|m| m.as_str().parse::<u32>().ok())
        })
        .last()
}
