use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::{Decomposer, Effect, FeatureValue, DIACRITICS};

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}

#[test]
fn unmodeled_diacritic_warns_and_keeps_features() {
    let decomposer = Decomposer::standard().unwrap();
    let (phone, logs) = with_captured_logs(|| decomposer.decompose("a\u{301}").unwrap());

    let toned = phone.as_segment().unwrap();
    let plain = decomposer.decompose("a").unwrap();
    assert_eq!(toned.features(), plain.as_segment().unwrap().features());
    assert_eq!(toned.surface(), "a\u{301}");

    assert!(logs.contains("WARN"), "{}", logs);
    assert!(logs.contains("acute_tone"), "{}", logs);
    assert!(logs.contains(r#"segment="a""#), "{}", logs);
}

#[test]
fn modeled_diacritics_do_not_warn() {
    let decomposer = Decomposer::standard().unwrap();
    let (_, logs) = with_captured_logs(|| {
        decomposer.decompose("t\u{2B0}").unwrap();
        decomposer.decompose("t\u{361}s").unwrap();
        decomposer.decompose("a\u{303}\u{2D0}").unwrap();
    });
    assert_eq!(logs, "");
}

#[test]
fn standard_registry_contents() {
    let unmodeled: Vec<&str> = DIACRITICS
        .iter()
        .filter(|diacritic| !diacritic.is_modeled())
        .map(|diacritic| diacritic.name())
        .collect();
    assert_eq!(unmodeled.len(), 15);
    assert!(unmodeled.contains(&"half_long"));

    let orthographic: Vec<&str> = DIACRITICS
        .iter()
        .filter(|diacritic| matches!(diacritic.effect(), Effect::Orthographic))
        .map(|diacritic| diacritic.name())
        .collect();
    assert_eq!(orthographic, ["tie_bar"]);

    assert_eq!(DIACRITICS.len(), 36);
}

#[test]
fn stacked_diacritics_apply_in_order() {
    let decomposer = Decomposer::standard().unwrap();
    // palatalization then velarization: the later one wins
    let phone = decomposer.decompose("t\u{2B2}\u{2E0}").unwrap();
    let segment = phone.as_segment().unwrap();
    assert_eq!(segment.diacritics().len(), 2);
    assert!(segment.is_back_velar());
    assert_eq!(segment.get(crate::Feature::Front), FeatureValue::Minus);
}

#[test]
fn rhotic_vowel() {
    let decomposer = Decomposer::standard().unwrap();
    let phone = decomposer.decompose("\u{259}\u{2DE}").unwrap();
    let hooked = phone.as_segment().unwrap();
    let precomposed = decomposer.decompose("\u{25A}").unwrap();
    assert_eq!(hooked.features(), precomposed.as_segment().unwrap().features());
    assert!(hooked.is_lamino_dental());
}
