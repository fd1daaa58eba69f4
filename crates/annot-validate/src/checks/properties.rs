//! Function property checks.

use crate::issue::Issue;

/// Properties the engine understands; matching is exact.
pub const KNOWN_PROPERTIES: &[&str] = &["deterministic", "noreturn"];

pub fn check<S: AsRef<str>>(properties: &[S]) -> Vec<Issue> {
    let mut issues = Vec::new();
    for property in properties {
        let property = property.as_ref();
        if !KNOWN_PROPERTIES.contains(&property) {
            issues.push(Issue::UnknownProperty {
                property: property.to_string(),
            });
        }
    }
    issues
}
