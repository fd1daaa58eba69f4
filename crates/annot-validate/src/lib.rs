//! Checks for target annotation documents.
//!
//! The symbolic-execution engine validates annotations while loading them
//! and aborts on the first problem. These checks report every such problem
//! up front, plus the ones the engine silently ignores:
//!
//! - **Shape**: entries are objects with `annotation` and `properties`
//! - **Slots**: a return slot exists; `MaybeInitNull` only annotates it
//! - **Statements**: offset syntax, numeric values, taint types and
//!   propagation indices
//! - **Properties**: only `deterministic` and `noreturn` are understood

pub mod checks;
mod issue;
mod report;
pub mod statement;

use serde_json::{Map, Value};
use tracing::debug;

use annot_model::OutputMapping;

pub use issue::{Issue, Severity};
pub use report::{CheckReport, Finding};

/// Check a document read as loose JSON.
pub fn check_document(document: &Map<String, Value>) -> CheckReport {
    let mut report = CheckReport {
        entries: document.len(),
        ..CheckReport::default()
    };
    for (function, value) in document {
        record(&mut report, function, checks::entry::check_value(value));
    }
    report
}

/// Check a mapping produced by conversion.
pub fn check_mapping(mapping: &OutputMapping) -> CheckReport {
    let mut report = CheckReport {
        entries: mapping.len(),
        ..CheckReport::default()
    };
    for (function, entry) in mapping.iter() {
        record(&mut report, function, checks::entry::check_entry(entry));
    }
    report
}

fn record(report: &mut CheckReport, function: &str, issues: Vec<Issue>) {
    for issue in issues {
        debug!(
            function = %function,
            code = issue.code(),
            severity = issue.severity().label(),
            "{}",
            issue.message()
        );
        report.findings.push(Finding {
            function: function.to_string(),
            issue,
        });
    }
}
