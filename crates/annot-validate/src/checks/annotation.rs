//! Annotation slot checks.

use crate::issue::Issue;

use super::statement;

/// Check the slot list of one entry.
pub fn check<S: AsRef<str>>(annotation: &[Vec<S>]) -> Vec<Issue> {
    if annotation.is_empty() {
        return vec![Issue::MissingReturnSlot];
    }
    annotation
        .iter()
        .enumerate()
        .flat_map(|(slot, statements)| {
            statements
                .iter()
                .flat_map(move |raw| statement::check(slot, raw.as_ref()))
        })
        .collect()
}
