//! Annotation file ingestion.
//!
//! This crate reads the JSON documents the converter consumes:
//!
//! - **Source documents**: objects keyed by `display(mangled)` whose values
//!   are per-parameter lists of raw taint tags
//! - **Target documents**: arbitrary JSON objects, read loosely so that the
//!   schema checker can report shape problems itself
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use annot_ingest::{load_source_documents, read_json_object};
//!
//! let documents = load_source_documents(&["lib.json", "app.json"])?;
//! let target = read_json_object(Path::new("annotations.json"))?;
//! ```

mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Readers ===
pub use annot_model::SourceDocument;
pub use reader::{
    load_source_document, load_source_documents, parse_json_object,
    parse_source_document, read_json_object,
};
