//! End-to-end tests for the conversion pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

use annot_cli::pipeline::{ConvertRequest, run_check, run_conversion};
use annot_model::{ConvertOptions, TaintMode};

fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, value.to_string()).unwrap();
    path
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn taint_conversion_writes_merged_document() {
    let dir = TempDir::new().unwrap();
    let first = write_json(
        dir.path(),
        "lib.json",
        &json!({
            "read(_Z4readiPvm)": [[], [], ["TaintOutput"], ["TaintPropagation::1"]],
            "system(system)": [[], ["Execute:5"]]
        }),
    );
    let second = write_json(
        dir.path(),
        "app.json",
        &json!({"recv(_Z4recviPvmi)": [[], [], ["TaintPropagation:1"]]}),
    );
    let output = dir.path().join("out.json");

    let mut request = ConvertRequest::new(vec![first, second], output.clone());
    request.options = ConvertOptions::new().with_taint(TaintMode::Normalize);
    let result = run_conversion(&request).unwrap();

    assert!(result.written);
    assert_eq!(result.conversion.sources.len(), 2);
    assert_eq!(result.conversion.diagnostics.len(), 2);
    assert_eq!(
        read_json(&output),
        json!({
            "_Z4readiPvm": {
                "name": "read",
                "annotation": [
                    [],
                    [],
                    ["TaintOutput::UntrustedSource"],
                    ["TaintPropagation::UntrustedSource:1"]
                ],
                "properties": []
            },
            "system": {
                "name": "system",
                "annotation": [[], ["TaintSink::Execute"]],
                "properties": []
            },
            "_Z4recviPvmi": {
                "name": "recv",
                "annotation": [[], [], ["TaintPropagation::UntrustedSource:1"]],
                "properties": []
            }
        })
    );
}

#[test]
fn output_keys_follow_merge_order() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.json");
    fs::write(&input, r#"{"z(_Zz)": [[]], "a(_Za)": [[]], "m(_Zm)": [[]]}"#).unwrap();
    let output = dir.path().join("out.json");

    run_conversion(&ConvertRequest::new(vec![input], output.clone())).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    let z = text.find("\"_Zz\"").unwrap();
    let a = text.find("\"_Za\"").unwrap();
    let m = text.find("\"_Zm\"").unwrap();
    assert!(z < a && a < m);
    assert!(text.ends_with("}\n"));
}

#[test]
fn later_input_wins() {
    let dir = TempDir::new().unwrap();
    let first = write_json(dir.path(), "a.json", &json!({"f(_Z1fv)": [["Deref"]]}));
    let second = write_json(dir.path(), "b.json", &json!({"f_v2(_Z1fv)": [["InitNull"]]}));
    let output = dir.path().join("out.json");

    let result = run_conversion(&ConvertRequest::new(vec![first, second], output.clone())).unwrap();

    assert_eq!(result.conversion.overwritten_count(), 1);
    assert_eq!(
        read_json(&output),
        json!({"_Z1fv": {"name": "f_v2", "annotation": [["InitNull"]], "properties": []}})
    );
}

#[test]
fn passthrough_keeps_tags_verbatim() {
    let dir = TempDir::new().unwrap();
    let input = write_json(
        dir.path(),
        "in.json",
        &json!({"g(_Z1gi)": [["TaintOutput"], ["Execute:5", "Deref:a:b:c"]]}),
    );
    let output = dir.path().join("out.json");

    run_conversion(&ConvertRequest::new(vec![input], output.clone())).unwrap();

    assert_eq!(
        read_json(&output)["_Z1gi"]["annotation"],
        json!([["TaintOutput"], ["Execute:5", "Deref:a:b:c"]])
    );
}

#[test]
fn failed_input_leaves_output_untouched() {
    let dir = TempDir::new().unwrap();
    let good = write_json(dir.path(), "good.json", &json!({"f(_Z1fv)": [[]]}));
    let bad = dir.path().join("bad.json");
    fs::write(&bad, "{ not json").unwrap();
    let output = dir.path().join("out.json");

    let err = run_conversion(&ConvertRequest::new(vec![good, bad], output.clone())).unwrap_err();

    assert_eq!(err.to_string(), "load source annotations");
    assert!(format!("{err:#}").contains("bad.json"));
    assert!(!output.exists());
}

#[test]
fn malformed_tag_aborts_taint_conversion() {
    let dir = TempDir::new().unwrap();
    let input = write_json(dir.path(), "in.json", &json!({"f(_Z1fv)": [["Execute:a:b:c"]]}));
    let output = dir.path().join("out.json");

    let mut request = ConvertRequest::new(vec![input], output.clone());
    request.options = ConvertOptions::new().with_taint(TaintMode::Normalize);
    let err = run_conversion(&request).unwrap_err();

    assert_eq!(err.to_string(), "convert source annotations");
    assert!(format!("{err:#}").contains("malformed tag"));
    assert!(!output.exists());
}

#[test]
fn dry_run_with_check_reports_without_writing() {
    let dir = TempDir::new().unwrap();
    let input = write_json(dir.path(), "in.json", &json!({"f(_Z1fv)": [], "g(_Z1gv)": [[]]}));
    let output = dir.path().join("out.json");

    let mut request = ConvertRequest::new(vec![input], output.clone());
    request.dry_run = true;
    request.check = true;
    let result = run_conversion(&request).unwrap();

    assert!(!result.written);
    assert!(!output.exists());
    let report = result.check.as_ref().unwrap();
    assert_eq!(report.entries, 2);
    assert_eq!(report.error_count(), 1);
    assert!(result.has_errors());
}

#[test]
fn check_reads_target_document() {
    let dir = TempDir::new().unwrap();
    let path = write_json(
        dir.path(),
        "target.json",
        &json!({
            "f": {"name": "f", "annotation": [[], ["MaybeInitNull"]], "properties": []},
            "g": {"name": "g", "annotation": [["InitNull"]], "properties": ["noreturn"]}
        }),
    );

    let report = run_check(&path).unwrap();

    assert_eq!(report.entries, 2);
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].function, "f");
    assert_eq!(report.findings[0].issue.code(), "A003");
}

#[test]
fn check_rejects_non_object_document() {
    let dir = TempDir::new().unwrap();
    let path = write_json(dir.path(), "target.json", &json!([1, 2]));

    let err = run_check(&path).unwrap_err();

    assert_eq!(err.to_string(), "load target annotations");
    assert!(format!("{err:#}").contains("expected a JSON object"));
}

#[test]
fn unwritable_output_names_the_write_stage() {
    let dir = TempDir::new().unwrap();
    let input = write_json(dir.path(), "in.json", &json!({"f(_Z1fv)": [[]]}));
    let output = dir.path().join("missing").join("out.json");

    let err = run_conversion(&ConvertRequest::new(vec![input], output)).unwrap_err();

    assert_eq!(err.to_string(), "write target annotations");
    assert!(format!("{err:#}").contains("out.json"));
}
