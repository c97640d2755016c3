#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/segmental/main/assets/segmental.svg",
    issue_tracker_base_url = "https://github.com/storyscript/segmental/issues/"
)]

//! Feature decomposition for IPA transcriptions.
//!
//! `segmental` turns a raw IPA string into a structured phonological value:
//! every symbol becomes a base [`Segment`] carrying a full articulatory
//! feature vector, and each trailing diacritic derives a new segment from
//! the previous one. Several vowel/glide bases in a row form an
//! [`Nphthong`].
//!
//! ## Layers
//!
//! - [`feature`] - The `+`/`-`/`0` value algebra and the closed set of features
//! - [`natural_class`] - Gated partitions of predicates and the exclusivity check
//! - [`segment`] - The segment value type and its classification predicates
//! - [`diacritic`] - The diacritic registry and feature transformations
//! - [`nphthong`] - Diphthongs, triphthongs and longer nuclei
//! - [`inventory`] - The base-segment table consulted by the decomposer
//! - [`decomposer`] - Greedy longest-match decomposition of raw strings
//!
//! ## Usage
//!
//! ```
//! use segmental::{Decomposer, Phone};
//!
//! let decomposer = Decomposer::standard().unwrap();
//!
//! let t = decomposer.decompose("t").unwrap();
//! let t = t.as_segment().unwrap();
//! assert!(t.is_obstruent());
//! assert!(t.is_stop());
//! assert!(!t.is_vowel());
//!
//! let ai = decomposer.decompose("ai").unwrap();
//! assert!(matches!(&*ai, Phone::Nphthong(n) if n.len() == 2));
//! ```
//!
//! ## Feature queries
//!
//! ```
//! use segmental::Decomposer;
//!
//! let decomposer = Decomposer::standard().unwrap();
//! let phone = decomposer.decompose("n\u{325}").unwrap();
//! let seg = phone.as_segment().unwrap();
//!
//! assert!(seg.check_features(&["+nasal", "-voice", "0tense"]).unwrap());
//! assert!(seg.check_features(&["+flavor"]).is_err());
//! ```

pub mod config;
pub mod decomposer;
pub mod diacritic;
pub mod errors;
pub mod feature;
pub mod inventory;
pub mod natural_class;
pub mod nphthong;
pub mod segment;

pub use config::DecomposerConfig;
pub use decomposer::{Decomposer, Phone};
pub use diacritic::{Diacritic, DiacriticRegistry, Effect, DIACRITICS};
pub use errors::{SegmentalError, SegmentalResult};
pub use feature::{Arity, Feature, FeatureValue, FeatureVector, SignedFeature};
pub use inventory::BaseInventory;
pub use natural_class::{
    Membership, NaturalClass, Partition, PartitionRegistry, Verdict, PARTITIONS,
};
pub use nphthong::Nphthong;
pub use segment::{FeatureChart, Segment, SegmentBuilder};
