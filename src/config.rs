//! Decomposer configuration loaded from TOML.
//!
//! ```toml
//! cache = true
//! normalize = true
//! inventory = "data/base_segments.toml"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{SegmentalError, SegmentalResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecomposerConfig {
    /// Memoize successful decompositions by their literal input.
    pub cache: bool,
    /// NFD-normalize input before matching.
    pub normalize: bool,
    /// Base-segment table to load instead of the bundled one.
    pub inventory: Option<PathBuf>,
}

impl Default for DecomposerConfig {
    fn default() -> Self {
        DecomposerConfig {
            cache: true,
            normalize: true,
            inventory: None,
        }
    }
}

impl DecomposerConfig {
    pub fn from_toml_str(content: &str) -> SegmentalResult<Self> {
        toml::from_str(content).map_err(|e| SegmentalError::Config {
            message: e.to_string(),
        })
    }

    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> SegmentalResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SegmentalError::Config {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;

        toml::from_str(&content).map_err(|e| SegmentalError::Config {
            message: format!("failed to parse {}: {}", path.display(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let config = DecomposerConfig::from_toml_str("cache = false").unwrap();
        assert!(!config.cache);
        assert!(config.normalize);
        assert_eq!(config.inventory, None);

        assert_eq!(DecomposerConfig::from_toml_str("").unwrap(), DecomposerConfig::default());
    }

    #[test]
    fn test_inventory_path() {
        let config = DecomposerConfig::from_toml_str(r#"inventory = "custom.toml""#).unwrap();
        assert_eq!(config.inventory, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_rejects_unknown_keys_and_bad_types() {
        assert!(matches!(
            DecomposerConfig::from_toml_str("cache = \"yes\""),
            Err(SegmentalError::Config { .. })
        ));
        assert!(matches!(
            DecomposerConfig::from_toml_str("memoize = true"),
            Err(SegmentalError::Config { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = DecomposerConfig::load(Path::new("does/not/exist.toml")).unwrap();
        assert_eq!(config, DecomposerConfig::default());
    }
}
