use std::sync::Arc;

use crate::{Decomposer, DecomposerConfig, Feature, FeatureValue, Phone, SegmentalError};

fn decomposer() -> Decomposer {
    Decomposer::standard().unwrap()
}

fn segment(input: &str) -> crate::Segment {
    decomposer()
        .decompose(input)
        .unwrap()
        .as_segment()
        .unwrap()
        .clone()
}

// ============ Scenarios ============

#[test]
fn voiceless_alveolar_stop() {
    let t = segment("t");
    assert!(t.is_obstruent());
    assert!(t.is_stop());
    assert!(!t.is_vowel());
    assert!(t.is_coronal());
    assert!(!t.is_dorsal());
    assert_eq!(t.get(Feature::Voice), FeatureValue::Minus);
}

#[test]
fn retracted_low_vowel() {
    let retracted = segment("a\u{320}");
    assert_eq!(retracted.base(), "a");
    assert_eq!(retracted.diacritics(), ["\u{320}".to_string()]);
    assert_eq!(retracted.get(Feature::Front), FeatureValue::Minus);
    assert_eq!(retracted.get(Feature::Back), FeatureValue::Plus);
    assert!(retracted.is_back());
    assert!(retracted.is_low_vowel());
}

#[test]
fn retracted_coronal_becomes_palato_alveolar() {
    let retracted = segment("t\u{320}");
    assert_eq!(retracted.get(Feature::Anterior), FeatureValue::Minus);
    assert_eq!(retracted.get(Feature::Distributed), FeatureValue::Plus);
    assert!(retracted.is_palato_alveolar());
}

#[test]
fn diphthong() {
    let phone = decomposer().decompose("ai").unwrap();
    let ai = phone.as_nphthong().unwrap();
    assert_eq!(ai.len(), 2);
    assert_eq!(ai.segments()[0].base(), "a");
    assert_eq!(ai.segments()[1].base(), "i");
    assert!(ai.iter().all(|segment| segment.is_vowel()));
    assert_eq!(phone.to_string(), "ai");
}

#[test]
fn triphthong_with_glide_and_diacritics() {
    let phone = decomposer().decompose("ja\u{303}i\u{32F}").unwrap();
    let nphthong = phone.as_nphthong().unwrap();
    assert_eq!(nphthong.len(), 3);
    assert!(nphthong.segments()[0].is_glide());
    assert!(nphthong.segments()[1].is_nasalized());
    assert_eq!(nphthong.segments()[2].get(Feature::Syllabic), FeatureValue::Minus);
    assert_eq!(nphthong.to_string(), "ja\u{303}i\u{32F}");
}

#[test]
fn unregistered_combining_mark() {
    assert_eq!(
        decomposer().decompose("t\u{334}").unwrap_err(),
        SegmentalError::UnrecognizedDiacritic {
            diacritic: "\u{334}".to_string(),
            codepoint: 0x334,
            input: "t\u{334}".to_string(),
        }
    );
}

#[test]
fn consonant_vowel_sequence_is_not_an_nphthong() {
    assert!(matches!(
        decomposer().decompose("pa"),
        Err(SegmentalError::InvalidNphthong { .. })
    ));
}

#[test]
fn impossible_derivation_fails_whole_decomposition() {
    let decomposer = decomposer();
    // retraction gives a labial anterior/distributed values
    assert!(matches!(
        decomposer.decompose("p\u{320}"),
        Err(SegmentalError::SegmentInvalid { .. })
    ));
    assert_eq!(decomposer.cached_len(), 0);
}

// ============ Diacritic forms ============

#[test]
fn aliases_are_kept_as_written() {
    let ring_above = segment("n\u{30A}");
    let ring_below = segment("n\u{325}");
    assert_eq!(ring_above.features(), ring_below.features());
    assert_eq!(ring_above.surface(), "n\u{30A}");
    assert_ne!(ring_above, ring_below);
}

#[test]
fn length_marks() {
    let long = segment("aː");
    assert!(long.is_long());
    assert!(!long.is_overlong());

    let overlong = segment("aːː");
    assert!(overlong.is_overlong());
    assert_eq!(overlong.diacritics(), ["ːː".to_string()]);
}

#[test]
fn secondary_articulations() {
    let labialized = segment("kʷ");
    assert!(labialized.is_labial());
    assert_eq!(labialized.get(Feature::Round), FeatureValue::Plus);

    let palatalized = segment("tʲ");
    assert!(palatalized.is_coronal());
    assert!(palatalized.is_dorsal());
    assert!(palatalized.is_fronted_velar());

    let ejective = segment("tʼ");
    assert!(ejective.is_constricted_glottis());

    let aspirated = segment("tʰ");
    assert!(aspirated.is_spread_glottis());
}

#[test]
fn pharyngealized_high_vowel_keeps_tense() {
    // a low vowel specified for tense is only allowed once diacritics apply
    let vowel = segment("i\u{2E4}");
    assert!(vowel.is_low_vowel());
    assert_eq!(vowel.get(Feature::Tense), FeatureValue::Plus);
}

#[test]
fn tense_exception() {
    let voiceless_labial_velar = segment("ʍ");
    assert!(!voiceless_labial_velar.is_glide());
    assert!(voiceless_labial_velar.is_fricative());
    assert_eq!(voiceless_labial_velar.get(Feature::Tense), FeatureValue::Plus);
}

#[test]
fn tie_barred_affricate_is_one_base() {
    let affricate = segment("t\u{361}s");
    assert_eq!(affricate.base(), "t\u{361}s");
    assert!(affricate.diacritics().is_empty());
    assert!(affricate.is_affricate());
}

#[test]
fn precomposed_input_is_normalized() {
    let nasalized = segment("\u{E3}");
    assert_eq!(nasalized.surface(), "a\u{303}");
    assert!(nasalized.is_nasalized());
}

// ============ Errors ============

#[test]
fn unknown_symbols() {
    let decomposer = decomposer();
    assert_eq!(decomposer.decompose("").unwrap_err(), SegmentalError::EmptyInput);
    assert_eq!(
        decomposer.decompose("Q").unwrap_err(),
        SegmentalError::NoBaseSegmentFound {
            remainder: "Q".to_string()
        }
    );
    // modifier letters are spacing characters, not combining marks
    assert_eq!(
        decomposer.decompose("a\u{2B1}").unwrap_err(),
        SegmentalError::NoBaseSegmentFound {
            remainder: "\u{2B1}".to_string()
        }
    );
}

#[test]
fn injected_registry_limits_diacritics() {
    let mut registry = crate::DiacriticRegistry::new();
    registry.register(crate::DIACRITICS.get("\u{325}").unwrap().clone(), &[]);
    let decomposer = decomposer().with_diacritics(Arc::new(registry));

    assert!(decomposer.decompose("n\u{325}").is_ok());
    assert_eq!(
        decomposer.decompose("t\u{2B0}").unwrap_err(),
        SegmentalError::NoBaseSegmentFound {
            remainder: "\u{2B0}".to_string()
        }
    );
    assert!(matches!(
        decomposer.decompose("a\u{303}"),
        Err(SegmentalError::UnrecognizedDiacritic { codepoint: 0x303, .. })
    ));
}

// ============ Cache ============

#[test]
fn repeated_decomposition_shares_result() {
    let decomposer = decomposer();
    let first = decomposer.decompose("t\u{2B0}").unwrap();
    let second = decomposer.decompose("t\u{2B0}").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(decomposer.cached_len(), 1);

    decomposer.clear_cache();
    let third = decomposer.decompose("t\u{2B0}").unwrap();
    assert!(!Arc::ptr_eq(&first, &third));
    assert_eq!(first, third);
}

#[test]
fn errors_are_not_cached() {
    let decomposer = decomposer();
    assert!(decomposer.decompose("t\u{334}").is_err());
    assert!(decomposer.decompose("t\u{334}").is_err());
    assert_eq!(decomposer.cached_len(), 0);
}

#[test]
fn shared_between_threads() {
    let decomposer = decomposer();
    let results: Vec<Arc<Phone>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| decomposer.decompose("ai").unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(decomposer.cached_len(), 1);
    let cached = decomposer.decompose("ai").unwrap();
    assert!(results.iter().all(|phone| **phone == *cached));
}

#[test]
fn decompose_all_splits_on_whitespace() {
    let phones = decomposer().decompose_all("  p a\u{303}\tai ").unwrap();
    let rendered: Vec<String> = phones.iter().map(|phone| phone.to_string()).collect();
    assert_eq!(rendered, ["p", "a\u{303}", "ai"]);

    assert!(decomposer().decompose_all("p Q").is_err());
}

#[test]
fn config_selects_inventory_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.toml");
    std::fs::write(
        &path,
        r#"
        columns = ["consonantal", "delayed_release", "labial"]

        [segments]
        "p" = "+-+"
        "#,
    )
    .unwrap();

    let config = DecomposerConfig {
        inventory: Some(path),
        ..DecomposerConfig::default()
    };
    let decomposer = Decomposer::from_config(config).unwrap();
    assert_eq!(decomposer.inventory().len(), 1);
    assert!(decomposer.decompose("p").is_ok());
    assert!(decomposer.decompose("t").is_err());
}

#[test]
fn config_with_missing_inventory_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = DecomposerConfig {
        inventory: Some(dir.path().join("missing.toml")),
        ..DecomposerConfig::default()
    };
    assert!(matches!(
        Decomposer::from_config(config),
        Err(SegmentalError::Inventory { .. })
    ));
}
