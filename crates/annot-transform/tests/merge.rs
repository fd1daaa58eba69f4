//! Tests for merging source documents.

use annot_model::{ConvertOptions, OutputEntry, SourceDocument, TaintMode};
use annot_transform::{convert, split_function_key};
use proptest::prelude::*;

fn document(path: &str, entries: &[(&str, Vec<Vec<&str>>)]) -> SourceDocument {
    SourceDocument::new(
        path,
        entries
            .iter()
            .map(|(key, annotation)| {
                let annotation: Vec<Vec<String>> = annotation
                    .iter()
                    .map(|slot| slot.iter().map(|tag| (*tag).to_string()).collect())
                    .collect();
                ((*key).to_string(), annotation)
            })
            .collect(),
    )
}

fn strings(slots: &[&[&str]]) -> Vec<Vec<String>> {
    slots
        .iter()
        .map(|slot| slot.iter().map(|tag| (*tag).to_string()).collect())
        .collect()
}

fn taint() -> ConvertOptions {
    ConvertOptions::new().with_taint(TaintMode::Normalize)
}

#[test]
fn entry_is_keyed_by_mangled_name() {
    let source = document(
        "a.json",
        &[("strcpy(_Z6strcpyPcPKc)", vec![vec!["TaintOutput"], vec!["Execute:5"]])],
    );

    let conversion = convert(&[source], &taint()).unwrap();

    assert_eq!(
        conversion.mapping.get("_Z6strcpyPcPKc"),
        Some(&OutputEntry::new(
            "strcpy",
            strings(&[&["TaintOutput::UntrustedSource"], &["TaintSink::Execute"]])
        ))
    );
    assert_eq!(conversion.diagnostics.len(), 1);
    assert_eq!(conversion.sources[0].diagnostics, 1);
    assert_eq!(conversion.rewritten_count(), 2);
}

#[test]
fn key_with_parenthesised_signature_falls_back_to_whole_key() {
    let source = document("a.json", &[("alpha(void alpha())", vec![vec!["TaintOutput"]])]);

    let conversion = convert(&[source], &taint()).unwrap();

    let entry = conversion.mapping.get("alpha(void alpha())").unwrap();
    assert_eq!(entry.name, "alpha(void alpha())");
    assert_eq!(conversion.sources[0].unsplit_keys, 1);
}

#[test]
fn later_document_wins() {
    let first = document(
        "first.json",
        &[
            ("foo(foo)", vec![vec!["Execute"], vec!["FormatString"]]),
            ("bar(bar)", vec![vec![]]),
        ],
    );
    let second = document("second.json", &[("other name(foo)", vec![vec!["Deref"]])]);

    let conversion = convert(&[first, second], &taint()).unwrap();

    assert_eq!(
        conversion.mapping.get("foo"),
        Some(&OutputEntry::new("other name", strings(&[&["Deref"]])))
    );
    assert_eq!(conversion.mapping.keys().collect::<Vec<_>>(), vec!["foo", "bar"]);
    assert_eq!(conversion.sources[1].overwritten, 1);
    assert_eq!(conversion.overwritten_count(), 1);
}

#[test]
fn passthrough_keeps_annotation_verbatim() {
    let raw = vec![vec!["TaintPropagation:42", "Execute:a:b:c"], vec!["TaintOutput"]];
    let source = document("a.json", &[("beta(beta)", raw)]);

    let conversion = convert(&[source], &ConvertOptions::new()).unwrap();

    let entry = conversion.mapping.get("beta").unwrap();
    assert_eq!(entry.name, "beta");
    assert_eq!(
        entry.annotation,
        strings(&[&["TaintPropagation:42", "Execute:a:b:c"], &["TaintOutput"]])
    );
    assert!(entry.properties.is_empty());
    assert!(conversion.diagnostics.is_empty());
    assert_eq!(conversion.rewritten_count(), 0);
}

#[test]
fn malformed_tag_aborts_conversion() {
    let good = document("good.json", &[("f(f)", vec![vec!["Execute"]])]);
    let bad = document("bad.json", &[("g(g)", vec![vec!["Execute:a:b:c"]])]);

    assert!(convert(&[good, bad], &taint()).is_err());
}

proptest! {
    #[test]
    fn split_recovers_parts(display in "[^\n]{0,12}", mangled in "[^()\n]{0,12}") {
        let name = split_function_key(&format!("{display}({mangled})"));

        prop_assert!(name.matched);
        prop_assert_eq!(name.display, display);
        prop_assert_eq!(name.mangled, mangled);
    }

    #[test]
    fn split_without_parentheses_is_identity(key in "[^()]{0,20}") {
        let name = split_function_key(&key);

        prop_assert!(!name.matched);
        prop_assert_eq!(&name.display, &key);
        prop_assert_eq!(&name.mangled, &key);
    }

    #[test]
    fn last_source_wins_for_shared_mangled_name(
        first in prop::collection::vec(prop::collection::vec("[A-Za-z]{1,8}", 0..3), 0..4),
        second in prop::collection::vec(prop::collection::vec("[A-Za-z]{1,8}", 0..3), 0..4),
    ) {
        let earlier = SourceDocument::new("1.json", vec![("one(foo)".to_string(), first)]);
        let later = SourceDocument::new("2.json", vec![("two(foo)".to_string(), second.clone())]);

        let conversion = convert(&[earlier, later], &ConvertOptions::new()).unwrap();

        prop_assert_eq!(conversion.mapping.len(), 1);
        prop_assert_eq!(conversion.mapping.get("foo"), Some(&OutputEntry::new("two", second)));
    }
}
