//! The table of base segments consulted by the decomposer.
//!
//! A table is a TOML document with a `[segments]` map from IPA symbol to a
//! sign string, and an optional `columns` list naming the feature each sign
//! belongs to (all features, in chart order, when omitted):
//!
//! ```toml
//! columns = ["syllabic", "consonantal", "sonorant", "voice"]
//!
//! [segments]
//! "p" = "-+--"
//! "a" = "+-++"
//! ```
//!
//! Features a narrowed table leaves out keep their unmarked value.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use unicode_normalization::UnicodeNormalization;

use crate::errors::{SegmentalError, SegmentalResult};
use crate::feature::{Feature, FeatureVector};
use crate::segment::Segment;

const STANDARD_TABLE: &str = include_str!("../data/base_segments.toml");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct InventoryTable {
    #[serde(default)]
    columns: Option<Vec<Feature>>,
    segments: BTreeMap<String, String>,
}

/// Base segments keyed by their NFD surface form.
#[derive(Debug, Clone, Default)]
pub struct BaseInventory {
    segments: HashMap<String, Segment>,
    /// Keys ordered longest first, for prefix matching.
    keys: Vec<String>,
}

impl BaseInventory {
    /// The bundled table covering the common IPA consonants and vowels.
    pub fn standard() -> SegmentalResult<Self> {
        Self::from_toml_str(STANDARD_TABLE)
    }

    pub fn from_toml_str(content: &str) -> SegmentalResult<Self> {
        let table: InventoryTable =
            toml::from_str(content).map_err(|e| SegmentalError::Inventory {
                symbol: String::new(),
                message: e.to_string(),
            })?;
        let columns = table.columns.as_deref().unwrap_or(Feature::ALL);

        let mut segments = Vec::with_capacity(table.segments.len());
        for (symbol, signs) in &table.segments {
            let base: String = symbol.nfd().collect();
            if base.is_empty() {
                return Err(SegmentalError::Inventory {
                    symbol: symbol.clone(),
                    message: "empty symbol".to_string(),
                });
            }
            let features =
                FeatureVector::from_signs_in(columns, signs).map_err(|error| match error {
                    SegmentalError::Inventory { message, .. } => SegmentalError::Inventory {
                        symbol: symbol.clone(),
                        message,
                    },
                    other => other,
                })?;
            segments.push(Segment::new(base, features, Vec::new())?);
        }

        Ok(Self::from_segments(segments))
    }

    /// Load a table from disk.
    pub fn load(path: &Path) -> SegmentalResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| SegmentalError::Inventory {
            symbol: String::new(),
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// Build from pre-validated segments. A later segment with the same
    /// base replaces an earlier one.
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        let segments: HashMap<String, Segment> = segments
            .into_iter()
            .map(|segment| (segment.base().to_string(), segment))
            .collect();

        let mut keys: Vec<String> = segments.keys().cloned().collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        BaseInventory { segments, keys }
    }

    pub fn get(&self, symbol: &str) -> Option<&Segment> {
        self.segments.get(symbol)
    }

    /// The longest symbol prefixing `text`, and its segment.
    pub fn longest_prefix<'t>(&self, text: &'t str) -> Option<(&'t str, &Segment)> {
        self.keys
            .iter()
            .find(|key| text.starts_with(key.as_str()))
            .and_then(|key| {
                let matched = &text[..key.len()];
                self.segments.get(key).map(|segment| (matched, segment))
            })
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Every segment, longest symbol first.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.keys.iter().filter_map(move |key| self.segments.get(key))
    }
}
