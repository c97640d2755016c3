//! Error types for segment construction and decomposition.
//!
//! Every failure is terminal for the operation that raised it: a
//! decomposition either yields a complete [`Phone`](crate::Phone) or one of
//! these errors, never a partial result.

use thiserror::Error;

/// Errors raised while building, deriving, or decomposing segments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentalError {
    /// A diacritic surface form has no registered transformation.
    #[error("unrecognized diacritic {diacritic:?} (U+{codepoint:04X}) in {input:?}")]
    UnrecognizedDiacritic {
        diacritic: String,
        codepoint: u32,
        input: String,
    },

    /// No base segment prefixes the remaining input.
    #[error("no base segment found at {remainder:?}")]
    NoBaseSegmentFound { remainder: String },

    /// Nothing to decompose.
    #[error("cannot decompose an empty string")]
    EmptyInput,

    /// A feature combination violates a segment invariant.
    #[error("invalid segment {segment:?}: {rule}")]
    SegmentInvalid { segment: String, rule: String },

    /// A gated partition did not classify the segment into exactly one class.
    #[error("exclusivity check for {partition} failed on {segment:?}: members {members:?}")]
    Exclusivity {
        partition: &'static str,
        segment: String,
        members: Vec<&'static str>,
    },

    /// An nphthong with too few members, or a member that is neither a
    /// vowel nor a glide.
    #[error("invalid nphthong {nphthong:?}: {reason}")]
    InvalidNphthong { nphthong: String, reason: String },

    /// An unspecified feature value was coerced into a boolean.
    #[error("cannot coerce unspecified value of {feature} into a boolean")]
    FeatureCoercion { feature: String },

    /// A feature name outside the closed feature set.
    #[error("unknown feature {name:?}")]
    UnknownFeature { name: String },

    /// A signed feature that does not start with `+`, `-` or `0`.
    #[error("malformed feature specification {spec:?}")]
    InvalidFeatureSpec { spec: String },

    /// A natural class name that no partition registers.
    #[error("unknown natural class {name:?}")]
    UnknownNaturalClass { name: String },

    /// A malformed row in a base-segment table.
    #[error("invalid inventory entry {symbol:?}: {message}")]
    Inventory { symbol: String, message: String },

    /// A configuration document that could not be read.
    #[error("invalid configuration: {message}")]
    Config { message: String },
}

impl SegmentalError {
    pub(crate) fn invalid(segment: impl Into<String>, rule: impl Into<String>) -> Self {
        SegmentalError::SegmentInvalid {
            segment: segment.into(),
            rule: rule.into(),
        }
    }
}

/// Result type for segmental operations.
pub type SegmentalResult<T> = Result<T, SegmentalError>;
