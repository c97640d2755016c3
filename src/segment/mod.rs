//! The segment value type.
//!
//! A [`Segment`] is a base IPA symbol, a complete [`FeatureVector`], and the
//! diacritics applied to the base, in application order. Segments are
//! immutable: every diacritic application goes through
//! [`Segment::derive`] and produces a new, re-validated segment.
//!
//! Identity is the surface string. Two segments are equal exactly when
//! `base + diacritics` renders the same, whatever their features.

pub mod classes;
mod display;

pub use classes::{GLIDE_OVERRIDES, SONORITY_EXEMPT, TENSE_EXCEPTIONS};
pub use display::FeatureChart;

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::errors::{SegmentalError, SegmentalResult};
use crate::feature::{Feature, FeatureValue, FeatureVector, SignedFeature};
use crate::natural_class::{Membership, PARTITIONS};

/// A base phoneme plus the diacritics applied to it.
#[derive(Clone)]
pub struct Segment {
    base: String,
    features: FeatureVector,
    diacritics: Vec<String>,
    surface: String,
}

impl Segment {
    /// Build and validate a segment.
    pub fn new(
        base: impl Into<String>,
        features: FeatureVector,
        diacritics: Vec<String>,
    ) -> SegmentalResult<Self> {
        SegmentBuilder {
            base: base.into(),
            features,
            diacritics,
        }
        .build()
    }

    /// Start a segment from the unmarked vector: binary features `-`,
    /// ternary features `0`.
    pub fn builder(base: impl Into<String>) -> SegmentBuilder {
        SegmentBuilder {
            base: base.into(),
            features: FeatureVector::unmarked(),
            diacritics: Vec::new(),
        }
    }

    /// Start a new segment from this one's base, features and diacritics.
    pub fn derive(&self) -> SegmentBuilder {
        SegmentBuilder {
            base: self.base.clone(),
            features: self.features,
            diacritics: self.diacritics.clone(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn features(&self) -> &FeatureVector {
        &self.features
    }

    pub fn diacritics(&self) -> &[String] {
        &self.diacritics
    }

    /// `base` followed by every diacritic.
    pub fn surface(&self) -> &str {
        &self.surface
    }

    pub fn get(&self, feature: Feature) -> FeatureValue {
        self.features.get(feature)
    }

    /// The value of a feature as a `bool`, failing for `0`.
    pub fn truth(&self, feature: Feature) -> SegmentalResult<bool> {
        self.get(feature).truth(feature)
    }

    pub(crate) fn has(&self, spec: &[(Feature, FeatureValue)]) -> bool {
        self.features.matches(spec)
    }

    /// Whether every signed feature holds exactly, e.g.
    /// `["+syllabic", "-voice", "0tense"]`.
    ///
    /// All specifications are parsed before any is evaluated, so an unknown
    /// name is reported even when an earlier feature already mismatches.
    pub fn check_features<S: AsRef<str>>(&self, specs: &[S]) -> SegmentalResult<bool> {
        let specs = specs
            .iter()
            .map(|spec| spec.as_ref().parse::<SignedFeature>())
            .collect::<SegmentalResult<Vec<_>>>()?;
        Ok(self.matches(&specs))
    }

    pub fn matches(&self, specs: &[SignedFeature]) -> bool {
        specs
            .iter()
            .all(|spec| self.get(spec.feature) == spec.value)
    }

    /// Gated membership in any registered natural class, by name.
    pub fn is(&self, class: &str) -> SegmentalResult<bool> {
        Ok(PARTITIONS.classify(self, class)? == Membership::Member)
    }

    // ---------------------------------------------------------------- //
    //                             Sonority                             //
    // ---------------------------------------------------------------- //

    pub fn is_vowel(&self) -> bool {
        classes::vowel(self)
    }

    /// `-syllabic -consonantal`, except for [`GLIDE_OVERRIDES`].
    pub fn is_glide(&self) -> bool {
        classes::glide(self)
    }

    pub fn is_liquid(&self) -> bool {
        classes::liquid(self)
    }

    pub fn is_nasal(&self) -> bool {
        classes::nasal(self)
    }

    pub fn is_obstruent(&self) -> bool {
        classes::obstruent(self)
    }

    // ---------------------------------------------------------------- //
    //                         Manner subclasses                        //
    // ---------------------------------------------------------------- //

    pub fn is_stop(&self) -> bool {
        self.is_obstruent() && classes::stop(self)
    }

    pub fn is_affricate(&self) -> bool {
        self.is_obstruent() && classes::affricate(self)
    }

    pub fn is_fricative(&self) -> bool {
        self.is_obstruent() && classes::fricative(self)
    }

    pub fn is_trill(&self) -> bool {
        self.is_liquid() && classes::trill(self)
    }

    pub fn is_tap(&self) -> bool {
        self.is_liquid() && classes::tap(self)
    }

    // ---------------------------------------------------------------- //
    //                              Vowels                              //
    // ---------------------------------------------------------------- //

    pub fn is_front(&self) -> bool {
        self.is_vowel() && classes::front(self)
    }

    pub fn is_central(&self) -> bool {
        self.is_vowel() && classes::central(self)
    }

    pub fn is_back(&self) -> bool {
        self.is_vowel() && classes::back(self)
    }

    pub fn is_upper_high_vowel(&self) -> bool {
        self.is_vowel() && classes::upper_high(self)
    }

    pub fn is_lower_high_vowel(&self) -> bool {
        self.is_vowel() && classes::lower_high(self)
    }

    pub fn is_upper_mid_vowel(&self) -> bool {
        self.is_vowel() && classes::upper_mid(self)
    }

    pub fn is_lower_mid_vowel(&self) -> bool {
        self.is_vowel() && classes::lower_mid(self)
    }

    pub fn is_low_vowel(&self) -> bool {
        self.is_vowel() && classes::low(self)
    }

    pub fn is_round(&self) -> bool {
        self.is_vowel() && classes::round(self)
    }

    /// A nasalized vowel, as opposed to a nasal consonant.
    pub fn is_nasalized(&self) -> bool {
        self.is_vowel() && classes::nasalized(self)
    }

    // Duration applies to consonants and vowels alike.

    pub fn is_short(&self) -> bool {
        classes::short(self)
    }

    pub fn is_long(&self) -> bool {
        classes::long(self)
    }

    pub fn is_overlong(&self) -> bool {
        classes::overlong(self)
    }

    // ---------------------------------------------------------------- //
    //                               Place                              //
    // ---------------------------------------------------------------- //

    pub fn is_labial(&self) -> bool {
        classes::labial(self)
    }

    pub fn is_coronal(&self) -> bool {
        classes::coronal(self)
    }

    pub fn is_lamino_dental(&self) -> bool {
        self.is_coronal() && classes::lamino_dental(self)
    }

    pub fn is_apico_alveolar(&self) -> bool {
        self.is_coronal() && classes::apico_alveolar(self)
    }

    pub fn is_palato_alveolar(&self) -> bool {
        self.is_coronal() && classes::palato_alveolar(self)
    }

    pub fn is_retroflex(&self) -> bool {
        self.is_coronal() && classes::retroflex(self)
    }

    pub fn is_dorsal(&self) -> bool {
        classes::dorsal(self)
    }

    pub fn is_fronted_velar(&self) -> bool {
        classes::dorsal_consonant(self) && classes::fronted_velar(self)
    }

    pub fn is_central_velar(&self) -> bool {
        classes::dorsal_consonant(self) && classes::central_velar(self)
    }

    pub fn is_back_velar(&self) -> bool {
        classes::dorsal_consonant(self) && classes::back_velar(self)
    }

    pub fn is_uvular(&self) -> bool {
        classes::dorsal_consonant(self) && classes::uvular(self)
    }

    pub fn is_pharyngeal(&self) -> bool {
        classes::dorsal_consonant(self) && classes::pharyngeal(self)
    }

    // ---------------------------------------------------------------- //
    //                             Laryngeal                            //
    // ---------------------------------------------------------------- //

    pub fn is_spread_glottis(&self) -> bool {
        classes::spread_glottis(self)
    }

    pub fn is_constricted_glottis(&self) -> bool {
        classes::constricted_glottis(self)
    }

    pub fn is_normal_glottis(&self) -> bool {
        classes::normal_glottis(self)
    }

    fn validate(&self) -> SegmentalResult<()> {
        let features = &self.features;
        let invalid = |rule: &str| Err(SegmentalError::invalid(self.surface.as_str(), rule));

        if let Some(feature) = features.arity_violation() {
            return invalid(&format!("{} is binary and cannot be 0", feature));
        }

        if !self.is_obstruent() && features.delayed_release().is_specified() {
            return invalid("delayed_release is only specified for obstruents");
        }

        let coronal_features = [Feature::Anterior, Feature::Distributed, Feature::Strident];
        if !self.is_coronal() && coronal_features.iter().any(|&f| self.get(f).is_specified()) {
            return invalid("coronal features are only specified for coronals");
        }

        let dorsal_features = [
            Feature::High,
            Feature::Low,
            Feature::Back,
            Feature::Front,
            Feature::Tense,
        ];
        if !self.is_dorsal() && dorsal_features.iter().any(|&f| self.get(f).is_specified()) {
            return invalid("dorsal features are only specified for dorsals");
        }

        // Diacritics may legitimately break this, e.g. pharyngealized [iˤ].
        if self.is_low_vowel() && features.tense().is_specified() && self.diacritics.is_empty() {
            return invalid("low vowels have 0tense");
        }

        if features.tense().is_specified()
            && !(self.is_glide() || self.is_vowel() || classes::listed(TENSE_EXCEPTIONS, self))
        {
            return invalid("only glides and vowels are specified for tense");
        }

        PARTITIONS.verify(self)
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.surface == other.surface
    }
}

impl Eq for Segment {}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.surface.hash(state);
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.surface)
    }
}

impl fmt::Debug for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segment")
            .field("surface", &self.surface)
            .field("features", &self.features.signs())
            .finish()
    }
}

/// Sparse overrides on top of a source segment, validated on [`build`].
///
/// [`build`]: SegmentBuilder::build
#[derive(Debug, Clone)]
pub struct SegmentBuilder {
    base: String,
    features: FeatureVector,
    diacritics: Vec<String>,
}

impl SegmentBuilder {
    pub fn set(mut self, feature: Feature, value: impl Into<FeatureValue>) -> Self {
        self.features.set(feature, value.into());
        self
    }

    pub fn apply(mut self, changes: &[(Feature, FeatureValue)]) -> Self {
        for &(feature, value) in changes {
            self.features.set(feature, value);
        }
        self
    }

    pub fn features(mut self, features: FeatureVector) -> Self {
        self.features = features;
        self
    }

    /// Append a diacritic's surface form.
    pub fn diacritic(mut self, surface: impl Into<String>) -> Self {
        self.diacritics.push(surface.into());
        self
    }

    pub fn build(self) -> SegmentalResult<Segment> {
        let mut surface = self.base.clone();
        for diacritic in &self.diacritics {
            surface.push_str(diacritic);
        }

        let segment = Segment {
            base: self.base,
            features: self.features,
            diacritics: self.diacritics,
            surface,
        };
        segment.validate()?;
        Ok(segment)
    }
}
