//! Per-statement checks.
//!
//! Mirrors what the engine verifies while constructing each statement:
//! offset syntax for every kind, numeric values for allocation and free
//! statements, and taint type plus parameter index for taint statements.

use crate::issue::Issue;
use crate::statement::{TargetKind, TargetStatement};

/// Check one statement found in `slot` (0 is the return value).
pub fn check(slot: usize, raw: &str) -> Vec<Issue> {
    let statement = TargetStatement::parse(raw);
    let mut issues = Vec::new();

    if statement.kind == TargetKind::MaybeInitNull && slot > 0 {
        issues.push(Issue::MaybeInitNullOnParameter { slot });
    }
    check_offset(slot, &statement, &mut issues);

    match statement.kind {
        TargetKind::AllocSource | TargetKind::Free => {
            if !statement.value.chars().all(|c| c.is_ascii_digit()) {
                issues.push(Issue::NonNumericValue {
                    slot,
                    statement: raw.to_string(),
                });
            }
        }
        kind if kind.is_taint() => check_taint(slot, &statement, &mut issues),
        _ => {}
    }
    issues
}

fn check_offset(slot: usize, statement: &TargetStatement<'_>, issues: &mut Vec<Issue>) {
    let mut unexpected = None;
    let mut chars = statement.offset.chars();
    while let Some(c) = chars.next() {
        match c {
            '*' | '&' => {}
            '[' => {
                // Index expressions are opaque up to the closing bracket.
                if !chars.by_ref().any(|c| c == ']') {
                    issues.push(Issue::UnclosedOffsetBracket {
                        slot,
                        statement: statement.raw.to_string(),
                    });
                    return;
                }
            }
            other => {
                unexpected.get_or_insert(other);
            }
        }
    }
    if let Some(found) = unexpected {
        issues.push(Issue::UnexpectedOffsetChar {
            slot,
            statement: statement.raw.to_string(),
            found,
        });
    }
}

fn check_taint(slot: usize, statement: &TargetStatement<'_>, issues: &mut Vec<Issue>) {
    if statement.taint_type().is_empty() {
        issues.push(Issue::MissingTaintType {
            slot,
            statement: statement.raw.to_string(),
        });
        return;
    }
    if statement.kind != TargetKind::TaintPropagation {
        return;
    }
    let valid_index = statement
        .taint_data()
        .parse::<u64>()
        .is_ok_and(|index| index >= 1);
    if !valid_index {
        issues.push(Issue::InvalidPropagationIndex {
            slot,
            statement: statement.raw.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(slot: usize, raw: &str) -> Vec<&'static str> {
        check(slot, raw).iter().map(Issue::code).collect()
    }

    #[test]
    fn normalized_taint_tags_are_clean() {
        for raw in [
            "TaintOutput::UntrustedSource",
            "TaintOutput::SensitiveDataSource",
            "TaintPropagation::UntrustedSource:1",
            "TaintSink::Execute",
        ] {
            assert!(codes(1, raw).is_empty(), "{raw}");
        }
    }

    #[test]
    fn offset_syntax() {
        assert!(codes(0, "Deref:*&[5]*").is_empty());
        assert_eq!(codes(0, "Deref:*[5"), vec!["A005"]);
        assert_eq!(codes(0, "Deref:x*y"), vec!["A006"]);
    }

    #[test]
    fn maybe_init_null_only_on_return() {
        assert!(codes(0, "MaybeInitNull").is_empty());
        assert_eq!(codes(2, "MaybeInitNull"), vec!["A003"]);
    }

    #[test]
    fn alloc_and_free_values_are_numeric() {
        assert!(codes(0, "AllocSource::1").is_empty());
        assert!(codes(1, "FreeSink").is_empty());
        assert_eq!(codes(1, "FreeSource::one"), vec!["A007"]);
    }

    #[test]
    fn taint_statements_need_type_and_index() {
        assert_eq!(codes(1, "TaintSink"), vec!["A008"]);
        assert_eq!(codes(1, "TaintOutput:*"), vec!["A008"]);
        assert_eq!(codes(1, "TaintPropagation::UntrustedSource"), vec!["A009"]);
        assert_eq!(codes(1, "TaintPropagation::UntrustedSource:0"), vec!["A009"]);
        assert_eq!(codes(1, "TaintPropagation::UntrustedSource:x"), vec!["A009"]);
    }
}
