#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/segmental/main/assets/segmental.svg",
    issue_tracker_base_url = "https://github.com/storyscript/segmental/issues/"
)]

//! Fixture-driven testing for `segmental`.
//!
//! Test cases live in TOML files under `fixtures/`: each case names an IPA
//! input, whether it should decompose into a segment, an nphthong or an
//! error, and the natural classes and signed features the result must have.
//!
//! ## Modules
//!
//! - [`fixture`] - Fixture and case types
//! - [`loader`] - Fixture file discovery and loading
//! - [`runner`] - Runs cases through a decomposer and collects outcomes
//! - [`formatter`] - Failure and summary reports
//! - [`errors`] - Error types for the harness

pub mod errors;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod runner;

pub use errors::{SpecError, SpecResult};
pub use fixture::{Case, Expectation, Fixture};
pub use formatter::{format_failure, format_summary};
pub use loader::{load_all_fixtures, load_fixture};
pub use runner::{
    error_kind, run_all, run_case, run_fixture, run_standard, CaseOutcome, CaseResult, FixtureReport,
    Mismatch,
};
