//! Data model shared by the annotation converter crates.

pub mod annotation;
pub mod diagnostic;
pub mod error;
pub mod options;
pub mod tag;

pub use annotation::{
    FunctionName, NormalizedAnnotation, OutputEntry, OutputMapping, RawAnnotation,
    SourceDocument,
};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use error::{ModelError, Result};
pub use options::{ConvertOptions, TaintMode};
pub use tag::{
    MAX_TAG_PARTS, NormalizedTag, RawTag, SourceKind, TAG_SEPARATOR, TaintCategory,
};
