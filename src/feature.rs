//! The feature value algebra.
//!
//! Phonological features are either binary (`+`/`-`) or ternary, where a
//! third value `0` marks a feature that is not distinctive for the segment
//! (for example `0tense` on a consonant). An unspecified value is neither
//! true nor false, so [`FeatureValue`] has no implicit conversion to `bool`:
//! predicates compare against explicit values instead, and the only way to
//! obtain a `bool` is [`FeatureValue::truth`], which names the feature
//! when it fails.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{SegmentalError, SegmentalResult};

/// A single feature value: `+`, `-` or `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureValue {
    Plus,
    Minus,
    Unspecified,
}

impl FeatureValue {
    /// This value as a `bool` for `feature`, failing for `0`.
    pub fn truth(self, feature: Feature) -> SegmentalResult<bool> {
        match self {
            FeatureValue::Plus => Ok(true),
            FeatureValue::Minus => Ok(false),
            FeatureValue::Unspecified => Err(SegmentalError::FeatureCoercion {
                feature: feature.name().to_string(),
            }),
        }
    }

    /// Parse a sign character.
    pub fn from_sign(sign: char) -> Option<Self> {
        match sign {
            '+' => Some(FeatureValue::Plus),
            '-' => Some(FeatureValue::Minus),
            '0' => Some(FeatureValue::Unspecified),
            _ => None,
        }
    }

    pub fn sign(self) -> char {
        match self {
            FeatureValue::Plus => '+',
            FeatureValue::Minus => '-',
            FeatureValue::Unspecified => '0',
        }
    }

    pub fn is_specified(self) -> bool {
        self != FeatureValue::Unspecified
    }
}

impl FromStr for FeatureValue {
    type Err = SegmentalError;

    fn from_str(sign: &str) -> SegmentalResult<Self> {
        let mut chars = sign.chars();
        match (chars.next().and_then(FeatureValue::from_sign), chars.next()) {
            (Some(value), None) => Ok(value),
            _ => Err(SegmentalError::InvalidFeatureSpec {
                spec: sign.to_string(),
            }),
        }
    }
}

impl From<bool> for FeatureValue {
    fn from(value: bool) -> Self {
        if value {
            FeatureValue::Plus
        } else {
            FeatureValue::Minus
        }
    }
}

/// `Plus == true`, `Minus == false`; `Unspecified` equals neither.
impl PartialEq<bool> for FeatureValue {
    fn eq(&self, other: &bool) -> bool {
        matches!(
            (self, other),
            (FeatureValue::Plus, true) | (FeatureValue::Minus, false)
        )
    }
}


impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sign())
    }
}

/// Which values a feature may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// `+` or `-`.
    Binary,
    /// `+`, `-` or `0`.
    Ternary,
}

impl Arity {
    pub fn allows(self, value: FeatureValue) -> bool {
        match self {
            Arity::Binary => value.is_specified(),
            Arity::Ternary => true,
        }
    }
}

macro_rules! features {
    ($( $(#[$doc:meta])* $variant:ident => $name:ident : $arity:ident ),+ $(,)?) => {
        /// The closed set of features every segment carries.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum Feature {
            $( $(#[$doc])* $variant ),+
        }

        impl Feature {
            /// All features, in chart order.
            pub const ALL: &'static [Feature] = &[ $( Feature::$variant ),+ ];

            /// The snake_case name used in signed specifications.
            pub fn name(self) -> &'static str {
                match self {
                    $( Feature::$variant => stringify!($name) ),+
                }
            }

            pub fn arity(self) -> Arity {
                match self {
                    $( Feature::$variant => Arity::$arity ),+
                }
            }
        }

        impl FromStr for Feature {
            type Err = SegmentalError;

            fn from_str(name: &str) -> SegmentalResult<Self> {
                $(
                    if name == stringify!($name) {
                        return Ok(Feature::$variant);
                    }
                )+
                Err(SegmentalError::UnknownFeature { name: name.to_string() })
            }
        }

        impl FeatureVector {
            $(
                pub fn $name(&self) -> FeatureValue {
                    self.get(Feature::$variant)
                }
            )+
        }
    };
}

features! {
    // Manner
    Syllabic => syllabic: Binary,
    Consonantal => consonantal: Binary,
    Approximant => approximant: Binary,
    Sonorant => sonorant: Binary,
    Continuant => continuant: Binary,
    /// Only specified for obstruents.
    DelayedRelease => delayed_release: Ternary,
    Trill => trill: Binary,
    Tap => tap: Binary,
    // Place
    Coronal => coronal: Binary,
    /// Only specified for coronals.
    Anterior => anterior: Ternary,
    /// Only specified for coronals.
    Distributed => distributed: Ternary,
    /// Only specified for coronals.
    Strident => strident: Ternary,
    Dorsal => dorsal: Binary,
    /// Only specified for dorsals.
    Front => front: Ternary,
    /// Only specified for dorsals.
    Back => back: Ternary,
    /// Only specified for dorsals.
    High => high: Ternary,
    /// Only specified for dorsals.
    Low => low: Ternary,
    /// Only specified for dorsal vowels and glides.
    Tense => tense: Ternary,
    Labial => labial: Binary,
    Labiodental => labiodental: Binary,
    // Laryngeal
    Voice => voice: Binary,
    SpreadGlottis => spread_glottis: Binary,
    ConstrictedGlottis => constricted_glottis: Binary,
    // Other
    Round => round: Binary,
    Long => long: Binary,
    Overlong => overlong: Binary,
    Nasal => nasal: Binary,
    Lateral => lateral: Binary,
}

impl Feature {
    pub const COUNT: usize = Feature::ALL.len();
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A feature paired with the value it is required to have, e.g. `-voice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignedFeature {
    pub feature: Feature,
    pub value: FeatureValue,
}

impl SignedFeature {
    pub fn new(feature: Feature, value: FeatureValue) -> Self {
        Self { feature, value }
    }
}

impl FromStr for SignedFeature {
    type Err = SegmentalError;

    /// Parse `"+syllabic"`, `"-voice"` or `"0tense"`.
    fn from_str(spec: &str) -> SegmentalResult<Self> {
        let mut chars = spec.chars();
        let value = chars
            .next()
            .and_then(FeatureValue::from_sign)
            .ok_or_else(|| SegmentalError::InvalidFeatureSpec {
                spec: spec.to_string(),
            })?;
        let feature = chars.as_str().parse()?;
        Ok(SignedFeature { feature, value })
    }
}

impl TryFrom<SignedFeature> for bool {
    type Error = SegmentalError;

    fn try_from(signed: SignedFeature) -> SegmentalResult<bool> {
        signed.value.truth(signed.feature)
    }
}

impl fmt::Display for SignedFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.feature)
    }
}

/// One value per [`Feature`], indexed by the feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureVector([FeatureValue; Feature::COUNT]);

impl FeatureVector {
    /// Every binary feature `-`, every ternary feature `0`.
    pub fn unmarked() -> Self {
        let mut values = [FeatureValue::Unspecified; Feature::COUNT];
        for &feature in Feature::ALL {
            if feature.arity() == Arity::Binary {
                values[feature as usize] = FeatureValue::Minus;
            }
        }
        FeatureVector(values)
    }

    /// Parse one sign per feature, in [`Feature::ALL`] order.
    ///
    /// Whitespace is ignored so that rows can be grouped for readability.
    pub fn from_signs(signs: &str) -> SegmentalResult<Self> {
        Self::from_signs_in(Feature::ALL, signs)
    }

    /// Parse one sign per column, where `columns` names the feature each
    /// sign belongs to. Features missing from `columns` keep their
    /// unmarked value.
    ///
    /// Errors are [`SegmentalError::Inventory`] with the row itself as the
    /// symbol; table loaders replace it with the row's key.
    pub fn from_signs_in(columns: &[Feature], row: &str) -> SegmentalResult<Self> {
        let malformed = |message: String| SegmentalError::Inventory {
            symbol: row.to_string(),
            message,
        };
        let signs: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
        if signs.len() != columns.len() {
            return Err(malformed(format!(
                "expected {} feature signs, found {}",
                columns.len(),
                signs.len()
            )));
        }

        let mut vector = FeatureVector::unmarked();
        for (&feature, &sign) in columns.iter().zip(signs.iter()) {
            let value = FeatureValue::from_sign(sign)
                .ok_or_else(|| malformed(format!("invalid sign {:?} for {}", sign, feature)))?;
            vector.set(feature, value);
        }
        Ok(vector)
    }

    pub fn get(&self, feature: Feature) -> FeatureValue {
        self.0[feature as usize]
    }

    pub fn set(&mut self, feature: Feature, value: FeatureValue) {
        self.0[feature as usize] = value;
    }

    pub fn with(mut self, feature: Feature, value: FeatureValue) -> Self {
        self.set(feature, value);
        self
    }

    /// Whether every `(feature, value)` pair holds exactly.
    pub fn matches(&self, spec: &[(Feature, FeatureValue)]) -> bool {
        spec.iter().all(|&(feature, value)| self.get(feature) == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Feature, FeatureValue)> + '_ {
        Feature::ALL.iter().map(move |&feature| (feature, self.get(feature)))
    }

    /// The first feature holding a value its arity forbids.
    pub fn arity_violation(&self) -> Option<Feature> {
        self.iter()
            .find(|&(feature, value)| !feature.arity().allows(value))
            .map(|(feature, _)| feature)
    }

    /// Render the vector as a sign string in [`Feature::ALL`] order.
    pub fn signs(&self) -> String {
        self.0.iter().map(|value| value.sign()).collect()
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::unmarked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_against_bool_is_strict() {
        assert!(FeatureValue::Plus == true);
        assert!(FeatureValue::Minus == false);
        assert!(FeatureValue::Unspecified != true);
        assert!(FeatureValue::Unspecified != false);
        assert_ne!(FeatureValue::Plus, FeatureValue::Unspecified);
    }

    #[test]
    fn test_coercion_rejects_unspecified() {
        assert_eq!(FeatureValue::Plus.truth(Feature::Voice), Ok(true));
        assert_eq!(FeatureValue::Minus.truth(Feature::Voice), Ok(false));
        assert_eq!(
            FeatureValue::Unspecified.truth(Feature::Tense),
            Err(SegmentalError::FeatureCoercion {
                feature: "tense".to_string()
            })
        );

        let signed: SignedFeature = "0delayed_release".parse().unwrap();
        assert_eq!(
            bool::try_from(signed),
            Err(SegmentalError::FeatureCoercion {
                feature: "delayed_release".to_string()
            })
        );
        let signed: SignedFeature = "+voice".parse().unwrap();
        assert_eq!(bool::try_from(signed), Ok(true));
    }

    #[test]
    fn test_parse_value() {
        assert_eq!("0".parse::<FeatureValue>(), Ok(FeatureValue::Unspecified));
        assert_eq!("+".parse::<FeatureValue>(), Ok(FeatureValue::Plus));
        assert!("++".parse::<FeatureValue>().is_err());
        assert!("".parse::<FeatureValue>().is_err());
    }

    #[test]
    fn test_arity() {
        assert!(!Arity::Binary.allows(FeatureValue::Unspecified));
        assert!(Arity::Binary.allows(FeatureValue::Minus));
        assert!(Arity::Ternary.allows(FeatureValue::Unspecified));
        assert_eq!(Feature::Voice.arity(), Arity::Binary);
        assert_eq!(Feature::Tense.arity(), Arity::Ternary);
    }

    #[test]
    fn test_feature_names_round_trip() {
        assert_eq!(Feature::COUNT, 28);
        for &feature in Feature::ALL {
            assert_eq!(feature.name().parse::<Feature>(), Ok(feature));
        }
        assert_eq!(
            "flavor".parse::<Feature>(),
            Err(SegmentalError::UnknownFeature {
                name: "flavor".to_string()
            })
        );
    }

    #[test]
    fn test_signed_feature() {
        let spec: SignedFeature = "0tense".parse().unwrap();
        assert_eq!(spec.feature, Feature::Tense);
        assert_eq!(spec.value, FeatureValue::Unspecified);
        assert_eq!(spec.to_string(), "0tense");

        assert!(matches!(
            "?voice".parse::<SignedFeature>(),
            Err(SegmentalError::InvalidFeatureSpec { .. })
        ));
        assert!(matches!(
            "".parse::<SignedFeature>(),
            Err(SegmentalError::InvalidFeatureSpec { .. })
        ));
        assert!(matches!(
            "+voiced".parse::<SignedFeature>(),
            Err(SegmentalError::UnknownFeature { .. })
        ));
    }

    #[test]
    fn test_unmarked_vector() {
        let vector = FeatureVector::unmarked();
        assert_eq!(vector.voice(), FeatureValue::Minus);
        assert_eq!(vector.delayed_release(), FeatureValue::Unspecified);
        assert_eq!(vector.arity_violation(), None);
    }

    #[test]
    fn test_from_signs() {
        let vector = FeatureVector::from_signs(
            "-+------ -000 -00000 +- --- -----",
        )
        .unwrap();
        assert_eq!(vector.consonantal(), FeatureValue::Plus);
        assert_eq!(vector.labial(), FeatureValue::Plus);
        assert_eq!(vector.delayed_release(), FeatureValue::Minus);
        assert_eq!(vector.anterior(), FeatureValue::Unspecified);
        assert_eq!(vector.signs(), "-+-------000-00000+---------");

        assert_eq!(
            FeatureVector::from_signs("+-"),
            Err(SegmentalError::Inventory {
                symbol: "+-".to_string(),
                message: "expected 28 feature signs, found 2".to_string(),
            })
        );
        assert!(matches!(
            FeatureVector::from_signs(&"x".repeat(28)),
            Err(SegmentalError::Inventory { message, .. }) if message == "invalid sign 'x' for syllabic"
        ));
    }

    #[test]
    fn test_arity_violation() {
        let vector = FeatureVector::unmarked().with(Feature::Voice, FeatureValue::Unspecified);
        assert_eq!(vector.arity_violation(), Some(Feature::Voice));
    }
}
