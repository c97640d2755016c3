//! Greedy decomposition of raw IPA strings.
//!
//! The input is scanned left to right. At the start, and whenever no
//! diacritic continues the current segment, the longest base symbol from the
//! [`BaseInventory`] is taken; each following diacritic (longest surface
//! first) derives a new segment from the previous one. A single base yields
//! [`Phone::Segment`], several yield a validated [`Phone::Nphthong`].
//!
//! Successful results are cached by literal input and shared as `Arc`s.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::config::DecomposerConfig;
use crate::diacritic::{DiacriticRegistry, DIACRITICS};
use crate::errors::{SegmentalError, SegmentalResult};
use crate::inventory::BaseInventory;
use crate::nphthong::Nphthong;
use crate::segment::Segment;

/// The outcome of a decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Phone {
    Segment(Segment),
    Nphthong(Nphthong),
}

impl Phone {
    pub fn as_segment(&self) -> Option<&Segment> {
        match self {
            Phone::Segment(segment) => Some(segment),
            Phone::Nphthong(_) => None,
        }
    }

    pub fn as_nphthong(&self) -> Option<&Nphthong> {
        match self {
            Phone::Nphthong(nphthong) => Some(nphthong),
            Phone::Segment(_) => None,
        }
    }

    /// The constituent segments; a single segment for [`Phone::Segment`].
    pub fn segments(&self) -> &[Segment] {
        match self {
            Phone::Segment(segment) => std::slice::from_ref(segment),
            Phone::Nphthong(nphthong) => nphthong.segments(),
        }
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phone::Segment(segment) => fmt::Display::fmt(segment, f),
            Phone::Nphthong(nphthong) => fmt::Display::fmt(nphthong, f),
        }
    }
}

type PhoneCache = RwLock<HashMap<String, Arc<Phone>>>;

/// Turns raw strings into [`Phone`]s.
///
/// A decomposer is `Send + Sync`; one instance can be shared between
/// threads and its cache fills from all of them.
pub struct Decomposer {
    inventory: Arc<BaseInventory>,
    diacritics: Arc<DiacriticRegistry>,
    config: DecomposerConfig,
    cache: PhoneCache,
}

impl Decomposer {
    /// A decomposer over `inventory` with the standard diacritics.
    pub fn new(inventory: Arc<BaseInventory>) -> Self {
        Decomposer {
            inventory,
            diacritics: Arc::clone(&DIACRITICS),
            config: DecomposerConfig::default(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// The bundled inventory with default configuration.
    pub fn standard() -> SegmentalResult<Self> {
        Ok(Self::new(Arc::new(BaseInventory::standard()?)))
    }

    /// Build from configuration, loading `config.inventory` if set.
    pub fn from_config(config: DecomposerConfig) -> SegmentalResult<Self> {
        let inventory = match &config.inventory {
            Some(path) => BaseInventory::load(path)?,
            None => BaseInventory::standard()?,
        };
        Ok(Self::new(Arc::new(inventory)).with_config(config))
    }

    pub fn with_diacritics(mut self, diacritics: Arc<DiacriticRegistry>) -> Self {
        self.diacritics = diacritics;
        self.cache.get_mut().clear();
        self
    }

    pub fn with_config(mut self, config: DecomposerConfig) -> Self {
        self.config = config;
        self.cache.get_mut().clear();
        self
    }

    pub fn inventory(&self) -> &BaseInventory {
        &self.inventory
    }

    pub fn diacritics(&self) -> &DiacriticRegistry {
        &self.diacritics
    }

    pub fn config(&self) -> &DecomposerConfig {
        &self.config
    }

    /// Decompose `raw` into a segment or an nphthong.
    ///
    /// Repeated calls with the same input return the same `Arc` while
    /// caching is enabled. Errors are not cached.
    pub fn decompose(&self, raw: &str) -> SegmentalResult<Arc<Phone>> {
        if self.config.cache {
            if let Some(phone) = self.cache.read().get(raw) {
                tracing::debug!(input = raw, "decomposition cache hit");
                return Ok(Arc::clone(phone));
            }
        }

        let phone = Arc::new(self.decompose_uncached(raw)?);
        tracing::debug!(input = raw, phone = %phone, "decomposed");

        if !self.config.cache {
            return Ok(phone);
        }
        let mut cache = self.cache.write();
        Ok(Arc::clone(cache.entry(raw.to_string()).or_insert(phone)))
    }

    /// Decompose every whitespace-separated token of `text`.
    pub fn decompose_all(&self, text: &str) -> SegmentalResult<Vec<Arc<Phone>>> {
        text.split_whitespace()
            .map(|token| self.decompose(token))
            .collect()
    }

    pub fn cached_len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn clear_cache(&self) {
        self.cache.write().clear();
    }

    fn decompose_uncached(&self, raw: &str) -> SegmentalResult<Phone> {
        let text: String = if self.config.normalize {
            raw.nfd().collect()
        } else {
            raw.to_string()
        };
        if text.is_empty() {
            return Err(SegmentalError::EmptyInput);
        }

        let mut segments: Vec<Segment> = Vec::new();
        let mut rest = text.as_str();

        while !rest.is_empty() {
            if let Some(current) = segments.last_mut() {
                if let Some((matched, diacritic)) = self.diacritics.longest_match(rest) {
                    tracing::trace!(
                        diacritic = diacritic.name(),
                        target = current.surface(),
                        "diacritic"
                    );
                    *current = diacritic.apply_as(current, matched)?;
                    rest = &rest[matched.len()..];
                    continue;
                }
            }

            if let Some((matched, base)) = self.inventory.longest_prefix(rest) {
                tracing::trace!(base = matched, "base segment");
                segments.push(base.clone());
                rest = &rest[matched.len()..];
                continue;
            }

            return Err(self.unmatched(&text, rest, !segments.is_empty()));
        }

        if segments.len() == 1 {
            Ok(Phone::Segment(segments.remove(0)))
        } else {
            Ok(Phone::Nphthong(Nphthong::new(segments)?))
        }
    }

    /// The error for a position where neither a diacritic nor a base
    /// matches.
    fn unmatched(&self, text: &str, rest: &str, after_base: bool) -> SegmentalError {
        match rest.chars().next() {
            Some(ch) if after_base && is_combining_mark(ch) => {
                SegmentalError::UnrecognizedDiacritic {
                    diacritic: ch.to_string(),
                    codepoint: u32::from(ch),
                    input: text.to_string(),
                }
            }
            _ => SegmentalError::NoBaseSegmentFound {
                remainder: rest.to_string(),
            },
        }
    }
}

impl fmt::Debug for Decomposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decomposer")
            .field("inventory", &self.inventory.len())
            .field("diacritics", &self.diacritics.len())
            .field("config", &self.config)
            .field("cached", &self.cached_len())
            .finish()
    }
}
