//! Raw natural-class predicates.
//!
//! These functions evaluate a class's defining features without applying
//! the partition gate; [`Segment`]'s `is_*` methods and the registered
//! partitions add the gate on top. Every test compares against explicit
//! values, so a `0` feature never satisfies either `+` or `-`.

use crate::feature::Feature::*;
use crate::feature::FeatureValue::{Minus, Plus};
use crate::segment::Segment;

/// Bases transcribed like glides that are not classified as glides.
pub const GLIDE_OVERRIDES: &[&str] = &["ʍ", "ɦ", "h", "ʔ"];

/// Bases excused from the sonority exclusivity check: the epiglottal
/// trills are both liquids and obstruents.
pub const SONORITY_EXEMPT: &[&str] = &["ʜ", "ʢ"];

/// Non-vocoid bases that may nevertheless be specified for tense.
pub const TENSE_EXCEPTIONS: &[&str] = &["ʍ"];

pub(crate) fn listed(table: &[&str], segment: &Segment) -> bool {
    table.iter().any(|&base| base == segment.base())
}

// Sonority

pub fn vowel(seg: &Segment) -> bool {
    seg.has(&[(Syllabic, Plus)])
        && !(glide(seg) || liquid(seg) || nasal(seg) || obstruent(seg))
}

pub fn glide(seg: &Segment) -> bool {
    !listed(GLIDE_OVERRIDES, seg) && seg.has(&[(Syllabic, Minus), (Consonantal, Minus)])
}

pub fn liquid(seg: &Segment) -> bool {
    seg.has(&[(Consonantal, Plus), (Approximant, Plus)])
}

pub fn nasal(seg: &Segment) -> bool {
    seg.has(&[(Approximant, Minus), (Sonorant, Plus)])
}

pub fn obstruent(seg: &Segment) -> bool {
    seg.has(&[(Sonorant, Minus)])
}

// Obstruents

pub fn stop(seg: &Segment) -> bool {
    seg.has(&[(Continuant, Minus), (DelayedRelease, Minus)])
}

pub fn affricate(seg: &Segment) -> bool {
    seg.has(&[(Continuant, Minus), (DelayedRelease, Plus)])
}

pub fn fricative(seg: &Segment) -> bool {
    seg.has(&[(Continuant, Plus), (DelayedRelease, Plus)])
}

// Liquids

pub fn trill(seg: &Segment) -> bool {
    seg.has(&[(Trill, Plus)])
}

pub fn tap(seg: &Segment) -> bool {
    seg.has(&[(Tap, Plus)])
}

// Vowel backness

pub fn front(seg: &Segment) -> bool {
    seg.has(&[(Front, Plus), (Back, Minus)])
}

pub fn central(seg: &Segment) -> bool {
    seg.has(&[(Front, Minus), (Back, Minus)])
}

pub fn back(seg: &Segment) -> bool {
    seg.has(&[(Front, Minus), (Back, Plus)])
}

// Vowel height

pub fn upper_high(seg: &Segment) -> bool {
    seg.has(&[(High, Plus), (Low, Minus), (Tense, Plus)])
}

pub fn lower_high(seg: &Segment) -> bool {
    seg.has(&[(High, Plus), (Low, Minus), (Tense, Minus)])
}

pub fn upper_mid(seg: &Segment) -> bool {
    seg.has(&[(High, Minus), (Low, Minus), (Tense, Plus)])
}

pub fn lower_mid(seg: &Segment) -> bool {
    seg.has(&[(High, Minus), (Low, Minus), (Tense, Minus)])
}

pub fn low(seg: &Segment) -> bool {
    seg.has(&[(High, Minus), (Low, Plus)])
}

// Vowel quality

pub fn round(seg: &Segment) -> bool {
    seg.has(&[(Round, Plus)])
}

pub fn nasalized(seg: &Segment) -> bool {
    seg.has(&[(Nasal, Plus)])
}

// Duration

pub fn short(seg: &Segment) -> bool {
    seg.has(&[(Long, Minus)])
}

pub fn long(seg: &Segment) -> bool {
    seg.has(&[(Long, Plus), (Overlong, Minus)])
}

pub fn overlong(seg: &Segment) -> bool {
    seg.has(&[(Overlong, Plus)])
}

// Place

pub fn labial(seg: &Segment) -> bool {
    seg.has(&[(Labial, Plus)])
}

pub fn coronal(seg: &Segment) -> bool {
    seg.has(&[(Coronal, Plus)])
}

pub fn dorsal(seg: &Segment) -> bool {
    seg.has(&[(Dorsal, Plus)])
}

pub fn lamino_dental(seg: &Segment) -> bool {
    seg.has(&[(Anterior, Plus), (Distributed, Plus)])
}

pub fn apico_alveolar(seg: &Segment) -> bool {
    seg.has(&[(Anterior, Plus), (Distributed, Minus)])
}

pub fn palato_alveolar(seg: &Segment) -> bool {
    seg.has(&[(Anterior, Minus), (Distributed, Plus)])
}

pub fn retroflex(seg: &Segment) -> bool {
    seg.has(&[(Anterior, Minus), (Distributed, Minus)])
}

/// Gate of the dorsal consonant partition.
pub fn dorsal_consonant(seg: &Segment) -> bool {
    dorsal(seg) && !vowel(seg)
}

pub fn fronted_velar(seg: &Segment) -> bool {
    seg.has(&[(High, Plus), (Low, Minus), (Front, Plus), (Back, Minus)])
}

pub fn central_velar(seg: &Segment) -> bool {
    seg.has(&[(High, Plus), (Low, Minus), (Front, Minus), (Back, Minus)])
}

pub fn back_velar(seg: &Segment) -> bool {
    seg.has(&[(High, Plus), (Low, Minus), (Front, Minus), (Back, Plus)])
}

pub fn uvular(seg: &Segment) -> bool {
    seg.has(&[(High, Minus), (Low, Minus), (Front, Minus), (Back, Plus)])
}

pub fn pharyngeal(seg: &Segment) -> bool {
    seg.has(&[(High, Minus), (Low, Plus), (Front, Minus), (Back, Plus)])
}

// Glottal width

pub fn spread_glottis(seg: &Segment) -> bool {
    seg.has(&[(SpreadGlottis, Plus), (ConstrictedGlottis, Minus)])
}

pub fn constricted_glottis(seg: &Segment) -> bool {
    seg.has(&[(SpreadGlottis, Minus), (ConstrictedGlottis, Plus)])
}

pub fn normal_glottis(seg: &Segment) -> bool {
    seg.has(&[(SpreadGlottis, Minus), (ConstrictedGlottis, Minus)])
}
