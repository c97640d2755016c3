//! Fixture file loading.

use crate::{Fixture, SpecError, SpecResult};
use std::fs;
use std::path::Path;

/// Load a single fixture file.
pub fn load_fixture(path: &Path) -> SpecResult<Fixture> {
    let content = fs::read_to_string(path).map_err(|e| SpecError::Load {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Fixture::from_toml_str(&content).map_err(|message| SpecError::Parse {
        path: path.display().to_string(),
        message,
    })
}

/// Load all fixtures from a directory (glob: **/*.toml), sorted by path.
pub fn load_all_fixtures(dir: &Path) -> SpecResult<Vec<(String, Fixture)>> {
    let mut fixtures = Vec::new();
    load_fixtures_recursive(dir, dir, &mut fixtures)?;
    fixtures.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(fixtures)
}

fn load_fixtures_recursive(
    base: &Path,
    dir: &Path,
    fixtures: &mut Vec<(String, Fixture)>,
) -> SpecResult<()> {
    if !dir.is_dir() {
        return Ok(());
    }

    for entry in fs::read_dir(dir).map_err(|e| SpecError::Load {
        path: dir.display().to_string(),
        message: e.to_string(),
    })? {
        let entry = entry.map_err(|e| SpecError::Load {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
        let path = entry.path();

        if path.is_dir() {
            load_fixtures_recursive(base, &path, fixtures)?;
        } else if path.extension().map_or(false, |e| e == "toml") {
            let relative = path.strip_prefix(base).unwrap_or(&path);
            let fixture = load_fixture(&path)?;
            fixtures.push((relative.display().to_string(), fixture));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_fixture() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join("consonants.toml");
        let fixture = load_fixture(&path).unwrap();
        assert!(fixture.title.is_some());
        assert!(!fixture.cases.is_empty());
    }

    #[test]
    fn test_load_all_fixtures() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
        let fixtures = load_all_fixtures(&dir).unwrap();
        let names: Vec<&str> = fixtures.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(
            names,
            [
                "consonants.toml",
                "diacritics.toml",
                "errors.toml",
                "nphthongs.toml",
                "vowels.toml"
            ]
        );
    }

    #[test]
    fn test_nested_and_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(
            nested.join("one.toml"),
            "[[case]]\ninput = \"p\"\nexpect = \"segment\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "not a fixture").unwrap();

        let fixtures = load_all_fixtures(dir.path()).unwrap();
        assert_eq!(fixtures.len(), 1);
        assert!(fixtures[0].0.ends_with("one.toml"));
    }

    #[test]
    fn test_parse_error_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[[case]]\ninput = 3\n").unwrap();

        match load_fixture(&path) {
            Err(SpecError::Parse { path: reported, .. }) => {
                assert!(reported.ends_with("broken.toml"))
            }
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let fixtures = load_all_fixtures(&dir.path().join("absent")).unwrap();
        assert!(fixtures.is_empty());
    }
}
