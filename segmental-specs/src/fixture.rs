//! Fixture documents.
//!
//! A fixture is a TOML file holding a title and a list of cases:
//!
//! ```toml
//! title = "Alveolar stops"
//!
//! [[case]]
//! input = "t"
//! expect = "segment"
//! classes = ["obstruent", "stop"]
//! features = ["-voice", "0tense"]
//!
//! [[case]]
//! input = "t̴"
//! expect = "error"
//! error = "unrecognized_diacritic"
//! ```

use serde::{Deserialize, Serialize};

/// A parsed fixture file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fixture {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "case")]
    pub cases: Vec<Case>,
}

impl Fixture {
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}

/// What a case's input should decompose into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    Segment,
    Nphthong,
    Error,
}

/// A single input and the checks run against its decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Case {
    pub input: String,
    pub expect: Expectation,
    /// Expected surface form, after normalization.
    #[serde(default)]
    pub surface: Option<String>,
    /// Classes every resulting segment belongs to.
    #[serde(default)]
    pub classes: Vec<String>,
    /// Classes no resulting segment belongs to.
    #[serde(default)]
    pub not_classes: Vec<String>,
    /// Signed features, e.g. `"+syllabic"`, every resulting segment has.
    #[serde(default)]
    pub features: Vec<String>,
    /// Number of segments in an nphthong.
    #[serde(default)]
    pub length: Option<usize>,
    /// Snake-case error kind, e.g. `"no_base_segment_found"`.
    #[serde(default)]
    pub error: Option<String>,
}
