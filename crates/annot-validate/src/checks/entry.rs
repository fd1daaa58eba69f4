//! Whole-entry checks.
//!
//! A loosely typed entry is first checked for the shape the engine expects:
//! an object with `annotation` (array of string arrays) and `properties`
//! (array of strings). Content checks run only on well-shaped entries, as
//! the engine stops at the first shape error.

use serde_json::Value;

use annot_model::OutputEntry;

use crate::issue::Issue;

use super::{annotation, properties};

/// Check a typed entry.
pub fn check_entry(entry: &OutputEntry) -> Vec<Issue> {
    let mut issues = annotation::check(&entry.annotation);
    issues.extend(properties::check(&entry.properties));
    issues
}

/// Check an entry read straight from JSON.
pub fn check_value(value: &Value) -> Vec<Issue> {
    let Value::Object(object) = value else {
        return vec![Issue::NotAnObject];
    };
    let missing: Vec<Issue> = ["annotation", "properties"]
        .into_iter()
        .filter(|field| !object.contains_key(*field))
        .map(|field| Issue::MissingField {
            field: field.to_string(),
        })
        .collect();
    if !missing.is_empty() {
        return missing;
    }

    let slots = match string_matrix(&object["annotation"]) {
        Ok(slots) => slots,
        Err(issue) => return vec![issue],
    };
    let names = match string_list(&object["properties"], "properties") {
        Ok(names) => names,
        Err(issue) => return vec![issue],
    };

    let mut issues = annotation::check(&slots);
    issues.extend(properties::check(&names));
    issues
}

fn string_matrix(value: &Value) -> Result<Vec<Vec<&str>>, Issue> {
    let Value::Array(slots) = value else {
        return Err(malformed("annotation", "an array of statement arrays"));
    };
    slots
        .iter()
        .enumerate()
        .map(|(slot, statements)| string_list(statements, &format!("annotation[{slot}]")))
        .collect()
}

fn string_list<'a>(value: &'a Value, field: &str) -> Result<Vec<&'a str>, Issue> {
    let Value::Array(items) = value else {
        return Err(malformed(field, "an array of strings"));
    };
    items
        .iter()
        .map(|item| item.as_str().ok_or_else(|| malformed(field, "an array of strings")))
        .collect()
}

fn malformed(field: &str, expected: &str) -> Issue {
    Issue::MalformedField {
        field: field.to_string(),
        expected: expected.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shape_errors_stop_content_checks() {
        let issues = check_value(&json!({"annotation": [], "properties": "noreturn"}));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code(), "A010");
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let issues = check_value(&json!({"name": "f"}));
        let codes: Vec<&str> = issues.iter().map(Issue::code).collect();
        assert_eq!(codes, vec!["A001", "A001"]);
    }

    #[test]
    fn nested_non_string_names_the_slot() {
        let issues = check_value(&json!({"annotation": [[], [1]], "properties": []}));
        assert_eq!(
            issues,
            vec![Issue::MalformedField {
                field: "annotation[1]".to_string(),
                expected: "an array of strings".to_string(),
            }]
        );
    }
}
