use std::path::Path;

use serde::Serialize;
use tracing::info;

use annot_model::OutputMapping;

use crate::error::{OutputError, Result};

/// Encode a value as JSON indented with two spaces.
pub fn encode_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Encode the merged mapping in entry order.
pub fn encode_mapping(mapping: &OutputMapping) -> Result<String> {
    encode_json(mapping)
}

/// Write the merged mapping to `path`, replacing any existing file.
///
/// The document is fully encoded before the file is created, so an encoding
/// failure leaves the filesystem untouched.
pub fn write_mapping(path: &Path, mapping: &OutputMapping) -> Result<()> {
    let mut text = encode_mapping(mapping)?;
    text.push('\n');
    std::fs::write(path, text).map_err(|source| OutputError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        entry_count = mapping.len(),
        "wrote target annotations"
    );
    Ok(())
}
