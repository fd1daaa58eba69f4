use std::fmt;

use crate::tag::SourceKind;

/// Why a source tag lost information during rewriting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Offset and data fields were present but have no target counterpart.
    FieldsDropped,
    /// A single trailing field was read as data instead of offset.
    Misprint,
    /// A non-empty offset was discarded; the data field was kept.
    OffsetDropped,
}

impl DiagnosticKind {
    pub fn label(&self) -> &'static str {
        match self {
            DiagnosticKind::FieldsDropped => "fields dropped",
            DiagnosticKind::Misprint => "misprint",
            DiagnosticKind::OffsetDropped => "offset dropped",
        }
    }
}

/// A lossy or malformed tag found while rewriting one function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Display name of the annotated function.
    pub function: String,
    /// Zero-based parameter slot.
    pub param_index: usize,
    pub source_kind: SourceKind,
    /// The raw tag as written in the input.
    pub tag: String,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn message(&self) -> String {
        let slot = format!("{} annotation elem #{}", self.function, self.param_index);
        match self.kind {
            DiagnosticKind::FieldsDropped => format!(
                "For {} in {slot} ignore offset and data from source annotation '{}'",
                self.source_kind, self.tag
            ),
            DiagnosticKind::Misprint => format!(
                "{} in {slot} misprint: '{}' read as <kind>:<data>",
                self.source_kind, self.tag
            ),
            DiagnosticKind::OffsetDropped => format!(
                "For {} in {slot} ignore offset from source annotation '{}'",
                self.source_kind, self.tag
            ),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
