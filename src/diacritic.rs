//! Diacritics and the feature changes they make.
//!
//! Every diacritic is registered once, with its canonical surface form and
//! any aliases, in [`DiacriticRegistry::standard`]. Applying a diacritic
//! never mutates a segment: the target is re-derived through
//! [`Segment::derive`] and re-validated, so a diacritic that produces an
//! impossible feature combination fails with the usual segment errors.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::errors::{SegmentalError, SegmentalResult};
use crate::feature::Feature::{self, *};
use crate::feature::FeatureValue::{self, Minus, Plus};
use crate::segment::Segment;

/// The standard diacritics, shared by every [`Decomposer`](crate::Decomposer)
/// that is not given its own registry.
pub static DIACRITICS: Lazy<Arc<DiacriticRegistry>> =
    Lazy::new(|| Arc::new(DiacriticRegistry::standard()));

/// What applying a diacritic does to the features of its target.
#[derive(Clone, Copy)]
pub enum Effect {
    /// Overwrite these features.
    Delta(&'static [(Feature, FeatureValue)]),
    /// Compute the overrides from the target.
    Custom(fn(&Segment) -> Vec<(Feature, FeatureValue)>),
    /// Part of the spelling only, such as a tie bar.
    Orthographic,
    /// Recognized but without a feature interpretation. Applying one logs a
    /// warning and leaves the features untouched.
    Unmodeled,
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Delta(changes) => f.debug_tuple("Delta").field(changes).finish(),
            Effect::Custom(_) => f.write_str("Custom"),
            Effect::Orthographic => f.write_str("Orthographic"),
            Effect::Unmodeled => f.write_str("Unmodeled"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Diacritic {
    name: &'static str,
    surface: &'static str,
    effect: Effect,
}

impl Diacritic {
    pub const fn new(name: &'static str, surface: &'static str, effect: Effect) -> Self {
        Diacritic {
            name,
            surface,
            effect,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The canonical surface form.
    pub fn surface(&self) -> &'static str {
        self.surface
    }

    pub fn effect(&self) -> Effect {
        self.effect
    }

    pub fn is_modeled(&self) -> bool {
        !matches!(self.effect, Effect::Unmodeled)
    }

    /// The overrides this diacritic makes on `segment`.
    pub fn changes(&self, segment: &Segment) -> Vec<(Feature, FeatureValue)> {
        match self.effect {
            Effect::Delta(changes) => changes.to_vec(),
            Effect::Custom(compute) => compute(segment),
            Effect::Orthographic | Effect::Unmodeled => Vec::new(),
        }
    }

    /// Derive a new segment carrying this diacritic in its canonical form.
    pub fn apply_to(&self, segment: &Segment) -> SegmentalResult<Segment> {
        self.apply_as(segment, self.surface)
    }

    /// Derive a new segment, recording the diacritic as `written`.
    ///
    /// The decomposer passes the form it actually matched, which may be an
    /// alias, so that the derived surface reproduces the input.
    pub fn apply_as(&self, segment: &Segment, written: &str) -> SegmentalResult<Segment> {
        if let Effect::Unmodeled = self.effect {
            tracing::warn!(
                diacritic = self.name,
                segment = segment.surface(),
                "diacritic has no feature interpretation; features left unchanged"
            );
        }

        segment
            .derive()
            .apply(&self.changes(segment))
            .diacritic(written)
            .build()
    }
}

impl fmt::Display for Diacritic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Diacritics keyed by every surface form they may be written with.
#[derive(Debug, Clone, Default)]
pub struct DiacriticRegistry {
    diacritics: Vec<Diacritic>,
    by_surface: HashMap<&'static str, usize>,
    /// Length of the longest registered surface, in codepoints.
    max_codepoints: usize,
}

impl DiacriticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `diacritic` under its canonical surface and each alias.
    /// A surface registered earlier is taken over by the new diacritic.
    pub fn register(&mut self, diacritic: Diacritic, aliases: &[&'static str]) -> &mut Self {
        let idx = self.diacritics.len();
        for &surface in std::iter::once(&diacritic.surface).chain(aliases) {
            self.max_codepoints = self.max_codepoints.max(surface.chars().count());
            self.by_surface.insert(surface, idx);
        }
        self.diacritics.push(diacritic);
        self
    }

    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry
            // syllabicity
            .register(Diacritic::new("syllabic", "\u{329}", Effect::Delta(SYLLABIC)), &["\u{30D}"])
            .register(
                Diacritic::new("non_syllabic", "\u{32F}", Effect::Delta(NON_SYLLABIC)),
                &["\u{311}"],
            )
            // laryngeal
            .register(Diacritic::new("voiceless", "\u{325}", Effect::Delta(VOICELESS)), &["\u{30A}"])
            .register(Diacritic::new("voiced", "\u{32C}", Effect::Delta(VOICED)), &[])
            .register(Diacritic::new("breathy", "\u{324}", Effect::Delta(SPREAD)), &[])
            .register(Diacritic::new("creaky", "\u{330}", Effect::Delta(CONSTRICTED)), &[])
            .register(Diacritic::new("aspirated", "ʰ", Effect::Delta(SPREAD)), &[])
            .register(Diacritic::new("ejective", "ʼ", Effect::Delta(CONSTRICTED)), &[])
            // place
            .register(Diacritic::new("dental", "\u{32A}", Effect::Delta(DENTAL)), &[])
            .register(Diacritic::new("advanced", "\u{31F}", Effect::Delta(ADVANCED)), &["˖"])
            .register(Diacritic::new("retracted", "\u{320}", Effect::Custom(retracted)), &["˗"])
            .register(Diacritic::new("centralized", "\u{308}", Effect::Delta(CENTRALIZED)), &[])
            // secondary articulation
            .register(Diacritic::new("labialized", "ʷ", Effect::Delta(LABIALIZED)), &[])
            .register(Diacritic::new("palatalized", "ʲ", Effect::Delta(PALATALIZED)), &[])
            .register(Diacritic::new("velarized", "ˠ", Effect::Delta(VELARIZED)), &[])
            .register(Diacritic::new("pharyngealized", "ˤ", Effect::Delta(PHARYNGEALIZED)), &[])
            .register(Diacritic::new("nasalized", "\u{303}", Effect::Delta(NASALIZED)), &[])
            .register(Diacritic::new("rhotic", "˞", Effect::Delta(RHOTIC)), &["ʽ"])
            // duration
            .register(Diacritic::new("long", "ː", Effect::Delta(LONG)), &[])
            .register(Diacritic::new("overlong", "ːː", Effect::Delta(OVERLONG)), &[])
            .register(Diacritic::new("tie_bar", "\u{361}", Effect::Orthographic), &["\u{35C}"]);

        for &(name, surface) in UNMODELED {
            registry.register(Diacritic::new(name, surface, Effect::Unmodeled), &[]);
        }
        registry
    }

    /// Exact lookup of a surface form.
    pub fn get(&self, surface: &str) -> SegmentalResult<&Diacritic> {
        self.by_surface
            .get(surface)
            .map(|&idx| &self.diacritics[idx])
            .ok_or_else(|| SegmentalError::UnrecognizedDiacritic {
                diacritic: surface.to_string(),
                codepoint: surface.chars().next().map_or(0, u32::from),
                input: surface.to_string(),
            })
    }

    /// The longest registered surface form that prefixes `text`, together
    /// with the diacritic it names.
    pub fn longest_match<'t>(&self, text: &'t str) -> Option<(&'t str, &Diacritic)> {
        let boundaries: Vec<usize> = text
            .char_indices()
            .map(|(idx, ch)| idx + ch.len_utf8())
            .take(self.max_codepoints)
            .collect();

        boundaries.iter().rev().find_map(|&end| {
            let candidate = &text[..end];
            self.by_surface
                .get(candidate)
                .map(|&idx| (candidate, &self.diacritics[idx]))
        })
    }

    /// Number of distinct diacritics, not counting aliases.
    pub fn len(&self) -> usize {
        self.diacritics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diacritics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diacritic> {
        self.diacritics.iter()
    }
}

const SYLLABIC: &[(Feature, FeatureValue)] = &[(Syllabic, Plus)];
const NON_SYLLABIC: &[(Feature, FeatureValue)] = &[(Syllabic, Minus)];
const VOICELESS: &[(Feature, FeatureValue)] = &[(Voice, Minus)];
const VOICED: &[(Feature, FeatureValue)] = &[(Voice, Plus)];
const SPREAD: &[(Feature, FeatureValue)] = &[(SpreadGlottis, Plus), (ConstrictedGlottis, Minus)];
const CONSTRICTED: &[(Feature, FeatureValue)] =
    &[(SpreadGlottis, Minus), (ConstrictedGlottis, Plus)];
const DENTAL: &[(Feature, FeatureValue)] = &[(Anterior, Plus), (Distributed, Plus)];
const ADVANCED: &[(Feature, FeatureValue)] = &[(Front, Plus), (Back, Minus)];
const CENTRALIZED: &[(Feature, FeatureValue)] = &[(Front, Minus), (Back, Minus)];
const LABIALIZED: &[(Feature, FeatureValue)] = &[(Labial, Plus), (Round, Plus)];
const PALATALIZED: &[(Feature, FeatureValue)] = &[
    (Dorsal, Plus),
    (High, Plus),
    (Low, Minus),
    (Front, Plus),
    (Back, Minus),
];
const VELARIZED: &[(Feature, FeatureValue)] = &[
    (Dorsal, Plus),
    (High, Plus),
    (Low, Minus),
    (Front, Minus),
    (Back, Plus),
];
const PHARYNGEALIZED: &[(Feature, FeatureValue)] = &[
    (Dorsal, Plus),
    (High, Minus),
    (Low, Plus),
    (Front, Minus),
    (Back, Plus),
];
const NASALIZED: &[(Feature, FeatureValue)] = &[(Nasal, Plus)];
const RHOTIC: &[(Feature, FeatureValue)] = &[
    (Coronal, Plus),
    (Anterior, Plus),
    (Distributed, Plus),
    (Strident, Minus),
];
const LONG: &[(Feature, FeatureValue)] = &[(Long, Plus)];
const OVERLONG: &[(Feature, FeatureValue)] = &[(Long, Plus), (Overlong, Plus)];

const UNMODELED: &[(&str, &str)] = &[
    ("half_long", "ˑ"),
    ("extra_short", "\u{306}"),
    ("raised", "\u{31D}"),
    ("lowered", "\u{31E}"),
    ("more_rounded", "\u{339}"),
    ("less_rounded", "\u{31C}"),
    ("mid_centralized", "\u{33D}"),
    ("no_audible_release", "\u{31A}"),
    ("acute_tone", "\u{301}"),
    ("grave_tone", "\u{300}"),
    ("mid_tone", "\u{304}"),
    ("falling_tone", "\u{302}"),
    ("rising_tone", "\u{30C}"),
    ("extra_high_tone", "\u{30B}"),
    ("extra_low_tone", "\u{30F}"),
];

/// Retraction moves the tongue body back on dorsals and the tongue blade
/// back on everything else.
fn retracted(segment: &Segment) -> Vec<(Feature, FeatureValue)> {
    if segment.is_dorsal() {
        vec![(Front, Minus), (Back, Plus)]
    } else {
        vec![(Anterior, Minus), (Distributed, Plus)]
    }
}
