//! Human-readable failure reports.

use std::fmt::Write;

use crate::runner::{CaseOutcome, CaseResult, FixtureReport};

/// Format one failed case with every mismatch it produced.
pub fn format_failure(fixture_name: &str, result: &CaseResult) -> String {
    let mut output = String::new();
    let mismatches = match &result.outcome {
        CaseOutcome::Failed(mismatches) => mismatches,
        CaseOutcome::Passed => return output,
    };

    writeln!(
        output,
        "FAIL: {} case {}: {:?}",
        fixture_name, result.index, result.case.input
    )
    .unwrap();
    for mismatch in mismatches {
        writeln!(
            output,
            "  \u{2717} {}: expected `{}`, found `{}`",
            mismatch.check, mismatch.expected, mismatch.actual
        )
        .unwrap();
    }
    output
}

/// One line per fixture, then every failure, then the totals.
pub fn format_summary(reports: &[FixtureReport]) -> String {
    let mut output = String::new();
    let mut passed = 0;
    let mut total = 0;

    for report in reports {
        passed += report.passed();
        total += report.results.len();
        let mark = if report.is_success() { "ok" } else { "FAILED" };
        write!(
            output,
            "{:<6} {} ({}/{})",
            mark,
            report.name,
            report.passed(),
            report.results.len()
        )
        .unwrap();
        if let Some(title) = &report.title {
            write!(output, " - {}", title).unwrap();
        }
        writeln!(output).unwrap();
    }

    for report in reports {
        for failure in report.failures() {
            writeln!(output).unwrap();
            output.push_str(&format_failure(&report.name, failure));
        }
    }

    writeln!(output).unwrap();
    write!(output, "{} of {} cases passed", passed, total).unwrap();
    output
}
