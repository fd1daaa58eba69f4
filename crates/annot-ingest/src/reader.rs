//! JSON document readers.

use std::path::Path;

use serde_json::{Map, Value};

use annot_model::{RawAnnotation, SourceDocument};

use crate::error::{IngestError, Result};

/// Reads a file and decodes its top-level JSON object.
///
/// Key order follows the document; a key repeated within one document keeps
/// its first position and its last value.
pub fn read_json_object(path: &Path) -> Result<Map<String, Value>> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_json_object(path, &text)
}

/// Decodes a top-level JSON object from text; `path` is used for errors only.
pub fn parse_json_object(path: &Path, text: &str) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(text).map_err(|e| IngestError::JsonParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(IngestError::NotAnObject {
            path: path.to_path_buf(),
            found: json_type_name(&other),
        }),
    }
}

/// Loads one source-analyzer annotation file.
pub fn load_source_document(path: &Path) -> Result<SourceDocument> {
    let object = read_json_object(path)?;
    let document = source_document_from_object(path, object)?;
    tracing::debug!(
        path = %path.display(),
        entry_count = document.len(),
        "Loaded source annotations"
    );
    Ok(document)
}

/// Decodes source annotations from text; `path` labels the document.
pub fn parse_source_document(path: &Path, text: &str) -> Result<SourceDocument> {
    let object = parse_json_object(path, text)?;
    source_document_from_object(path, object)
}

/// Loads every file in order, stopping at the first failure.
pub fn load_source_documents<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<SourceDocument>> {
    paths
        .iter()
        .map(|path| load_source_document(path.as_ref()))
        .collect()
}

fn source_document_from_object(path: &Path, object: Map<String, Value>) -> Result<SourceDocument> {
    let mut entries = Vec::with_capacity(object.len());
    for (key, value) in object {
        let annotation: RawAnnotation =
            serde_json::from_value(value).map_err(|e| IngestError::InvalidAnnotation {
                path: path.to_path_buf(),
                key: key.clone(),
                source: e,
            })?;
        entries.push((key, annotation));
    }
    Ok(SourceDocument {
        path: path.to_path_buf(),
        entries,
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
