//! Integration tests for loading annotation files from disk.

use std::fs;
use std::path::PathBuf;

use annot_ingest::{IngestError, load_source_documents, read_json_object};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_documents_in_argument_order() {
    let dir = TempDir::new().unwrap();
    let first = write(&dir, "first.json", r#"{"f(f)": [["TaintOutput"]]}"#);
    let second = write(&dir, "second.json", r#"{"g(g)": [[], ["Execute"]]}"#);

    let documents = load_source_documents(&[&second, &first]).unwrap();

    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].path, second);
    assert_eq!(documents[0].entries[0].0, "g(g)");
    assert_eq!(documents[1].path, first);
}

#[test]
fn malformed_json_names_the_file() {
    let dir = TempDir::new().unwrap();
    let good = write(&dir, "good.json", "{}");
    let bad = write(&dir, "bad.json", "{\"f(f)\": [[\"Execute\"]");

    let err = load_source_documents(&[good, bad.clone()]).unwrap_err();

    match &err {
        IngestError::JsonParse { path, .. } => assert_eq!(path, &bad),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("bad.json"));
}

#[test]
fn empty_object_is_an_empty_document() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "empty.json", "{}");

    let documents = load_source_documents(&[path]).unwrap();

    assert!(documents[0].is_empty());
}

#[test]
fn target_documents_are_read_loosely() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "target.json", r#"{"f": 3, "g": {"name": "g"}}"#);

    let object = read_json_object(&path).unwrap();

    assert_eq!(object.len(), 2);
    assert!(object["f"].is_number());
}
