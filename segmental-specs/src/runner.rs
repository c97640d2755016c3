//! Runs fixture cases through a [`Decomposer`].

use std::path::Path;

use segmental::{Decomposer, Phone, Segment, SegmentalError};

use crate::fixture::{Case, Expectation, Fixture};
use crate::loader::load_all_fixtures;
use crate::SpecResult;

/// One check that did not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub check: String,
    pub expected: String,
    pub actual: String,
}

impl Mismatch {
    fn new(check: impl Into<String>, expected: impl ToString, actual: impl ToString) -> Self {
        Mismatch {
            check: check.into(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    Passed,
    Failed(Vec<Mismatch>),
}

impl CaseOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, CaseOutcome::Passed)
    }
}

/// The outcome of one case, with enough context to report it.
#[derive(Debug, Clone)]
pub struct CaseResult {
    pub index: usize,
    pub case: Case,
    pub outcome: CaseOutcome,
}

/// Every case outcome of one fixture file.
#[derive(Debug, Clone)]
pub struct FixtureReport {
    pub name: String,
    pub title: Option<String>,
    pub results: Vec<CaseResult>,
}

impl FixtureReport {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.results.iter().filter(|r| !r.outcome.is_passed())
    }
}

/// The snake-case kind of an error, as written in fixtures.
pub fn error_kind(error: &SegmentalError) -> &'static str {
    match error {
        SegmentalError::UnrecognizedDiacritic { .. } => "unrecognized_diacritic",
        SegmentalError::NoBaseSegmentFound { .. } => "no_base_segment_found",
        SegmentalError::EmptyInput => "empty_input",
        SegmentalError::SegmentInvalid { .. } => "segment_invalid",
        SegmentalError::Exclusivity { .. } => "exclusivity",
        SegmentalError::InvalidNphthong { .. } => "invalid_nphthong",
        SegmentalError::FeatureCoercion { .. } => "feature_coercion",
        SegmentalError::UnknownFeature { .. } => "unknown_feature",
        SegmentalError::InvalidFeatureSpec { .. } => "invalid_feature_spec",
        SegmentalError::UnknownNaturalClass { .. } => "unknown_natural_class",
        SegmentalError::Inventory { .. } => "inventory",
        SegmentalError::Config { .. } => "config",
    }
}

fn phone_kind(phone: &Phone) -> &'static str {
    match phone {
        Phone::Segment(_) => "segment",
        Phone::Nphthong(_) => "nphthong",
    }
}

/// Decompose a case's input and run every check it names.
pub fn run_case(decomposer: &Decomposer, case: &Case) -> CaseOutcome {
    let mut mismatches = Vec::new();

    match (decomposer.decompose(&case.input), case.expect) {
        (Err(error), Expectation::Error) => {
            if let Some(expected) = &case.error {
                if expected != error_kind(&error) {
                    mismatches.push(Mismatch::new("error", expected, error_kind(&error)));
                }
            }
        }
        (Err(error), expect) => {
            mismatches.push(Mismatch::new("decomposition", format!("{:?}", expect), error));
        }
        (Ok(phone), Expectation::Error) => {
            mismatches.push(Mismatch::new("decomposition", "an error", &phone));
        }
        (Ok(phone), expect) => {
            let expected_kind = match expect {
                Expectation::Nphthong => "nphthong",
                _ => "segment",
            };
            if phone_kind(&phone) != expected_kind {
                mismatches.push(Mismatch::new("kind", expected_kind, phone_kind(&phone)));
            }
            check_phone(&phone, case, &mut mismatches);
        }
    }

    if mismatches.is_empty() {
        CaseOutcome::Passed
    } else {
        CaseOutcome::Failed(mismatches)
    }
}

fn check_phone(phone: &Phone, case: &Case, mismatches: &mut Vec<Mismatch>) {
    if let Some(surface) = &case.surface {
        let actual = phone.to_string();
        if *surface != actual {
            mismatches.push(Mismatch::new("surface", surface, actual));
        }
    }

    if let Some(length) = case.length {
        if phone.segments().len() != length {
            mismatches.push(Mismatch::new("length", length, phone.segments().len()));
        }
    }

    for segment in phone.segments() {
        check_segment(segment, case, mismatches);
    }
}

fn check_segment(segment: &Segment, case: &Case, mismatches: &mut Vec<Mismatch>) {
    for class in &case.classes {
        match segment.is(class) {
            Ok(true) => {}
            Ok(false) => mismatches.push(Mismatch::new(
                format!("{} is {}", segment, class),
                true,
                false,
            )),
            Err(error) => mismatches.push(Mismatch::new(class.as_str(), "a natural class", error)),
        }
    }

    for class in &case.not_classes {
        match segment.is(class) {
            Ok(false) => {}
            Ok(true) => mismatches.push(Mismatch::new(
                format!("{} is {}", segment, class),
                false,
                true,
            )),
            Err(error) => mismatches.push(Mismatch::new(class.as_str(), "a natural class", error)),
        }
    }

    for spec in &case.features {
        match segment.check_features(&[spec]) {
            Ok(true) => {}
            Ok(false) => {
                let actual = spec
                    .parse::<segmental::SignedFeature>()
                    .map(|signed| format!("{}{}", segment.get(signed.feature), signed.feature))
                    .unwrap_or_default();
                mismatches.push(Mismatch::new(format!("{} feature", segment), spec, actual));
            }
            Err(error) => mismatches.push(Mismatch::new(spec.as_str(), "a signed feature", error)),
        }
    }
}

/// Run every case of a fixture.
pub fn run_fixture(decomposer: &Decomposer, name: &str, fixture: &Fixture) -> FixtureReport {
    let results = fixture
        .cases
        .iter()
        .enumerate()
        .map(|(index, case)| {
            let outcome = run_case(decomposer, case);
            tracing::debug!(fixture = name, index, input = %case.input, passed = outcome.is_passed());
            CaseResult {
                index,
                case: case.clone(),
                outcome,
            }
        })
        .collect();

    FixtureReport {
        name: name.to_string(),
        title: fixture.title.clone(),
        results,
    }
}

/// Load and run every fixture under `dir`.
pub fn run_all(decomposer: &Decomposer, dir: &Path) -> SpecResult<Vec<FixtureReport>> {
    Ok(load_all_fixtures(dir)?
        .iter()
        .map(|(name, fixture)| run_fixture(decomposer, name, fixture))
        .collect())
}

/// Load and run every fixture under `dir` against the bundled inventory
/// and diacritics.
pub fn run_standard(dir: &Path) -> SpecResult<Vec<FixtureReport>> {
    let decomposer = Decomposer::standard()?;
    run_all(&decomposer, dir)
}
