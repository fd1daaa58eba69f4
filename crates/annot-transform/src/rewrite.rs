//! Taint tag rewriting.
//!
//! Each raw tag is looked up in a fixed table keyed by [`SourceKind`]:
//!
//! | Kind                  | Target                                    |
//! |-----------------------|-------------------------------------------|
//! | `TaintOutput`         | `TaintOutput::UntrustedSource`            |
//! | `TaintPropagation`    | `TaintPropagation::UntrustedSource:<data>` |
//! | `SensitiveDataSource` | `TaintOutput::SensitiveDataSource`        |
//! | `Execute`             | `TaintSink::Execute`                      |
//! | `FormatString`        | `TaintSink::FormatString`                 |
//! | `SensitiveDataLeak`   | `TaintSink::SensitiveDataLeak`            |
//!
//! Fields the target vocabulary cannot express are dropped and reported as
//! [`Diagnostic`]s. Tags of any other kind, and tags already in the target
//! vocabulary, are copied unchanged.

use tracing::warn;

use annot_model::{
    Diagnostic, DiagnosticKind, NormalizedAnnotation, NormalizedTag, RawTag, SourceKind,
};

use crate::error::{Result, TransformError};

/// Result of rewriting a single tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagRewrite {
    /// The tag is outside the rewrite table and is copied verbatim.
    Unchanged,
    /// The tag was mapped into the target vocabulary.
    Normalized {
        tag: NormalizedTag,
        source_kind: SourceKind,
        issue: Option<DiagnosticKind>,
    },
}

/// Rewrite one raw tag.
///
/// # Errors
///
/// Returns an error if the tag has more than three colon-separated parts
/// and is not already a target-vocabulary tag.
pub fn rewrite_tag(raw: &str) -> annot_model::Result<TagRewrite> {
    if raw.parse::<NormalizedTag>().is_ok() {
        return Ok(TagRewrite::Unchanged);
    }
    let tag = RawTag::parse(raw)?;
    Ok(rewrite_raw(&tag))
}

/// Target tag for a source kind, with `data` used by propagation tags.
pub fn target_tag(kind: SourceKind, data: &str) -> NormalizedTag {
    match kind {
        SourceKind::TaintOutput => NormalizedTag::UntrustedOutput,
        SourceKind::TaintPropagation => NormalizedTag::UntrustedPropagation(data.to_string()),
        SourceKind::SensitiveDataSource => NormalizedTag::SensitiveOutput,
        SourceKind::Execute => NormalizedTag::ExecuteSink,
        SourceKind::FormatString => NormalizedTag::FormatStringSink,
        SourceKind::SensitiveDataLeak => NormalizedTag::SensitiveDataLeakSink,
    }
}

fn rewrite_raw(tag: &RawTag<'_>) -> TagRewrite {
    let Some(source_kind) = tag.source_kind() else {
        return TagRewrite::Unchanged;
    };
    let (data, issue) = match source_kind {
        SourceKind::TaintPropagation => match (tag.offset, tag.data) {
            (None, _) => return TagRewrite::Unchanged,
            // `TaintPropagation:N` is a known producer misprint for
            // `TaintPropagation::N`.
            (Some(data), None) => (data, Some(DiagnosticKind::Misprint)),
            (Some(offset), Some(data)) => (
                data,
                (!offset.is_empty()).then_some(DiagnosticKind::OffsetDropped),
            ),
        },
        _ => ("", fields_dropped(tag)),
    };
    TagRewrite::Normalized {
        tag: target_tag(source_kind, data),
        source_kind,
        issue,
    }
}

fn fields_dropped(tag: &RawTag<'_>) -> Option<DiagnosticKind> {
    (tag.part_count() > 1).then_some(DiagnosticKind::FieldsDropped)
}

/// A rewritten annotation with everything that was lost along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub annotation: NormalizedAnnotation,
    pub diagnostics: Vec<Diagnostic>,
    /// Number of tags replaced by a target-vocabulary tag.
    pub rewritten: usize,
}

/// Rewrite every tag of one function's annotation.
///
/// Slot order and tag order within each slot are preserved. Each diagnostic
/// is logged at `warn` level and returned in the outcome.
///
/// # Errors
///
/// Returns [`TransformError::MalformedTag`] for a tag with more than three
/// colon-separated parts.
pub fn rewrite_annotation<S: AsRef<str>>(
    annotation: &[Vec<S>],
    function: &str,
) -> Result<RewriteOutcome> {
    let mut outcome = RewriteOutcome {
        annotation: Vec::with_capacity(annotation.len()),
        ..RewriteOutcome::default()
    };
    for (param_index, slot) in annotation.iter().enumerate() {
        let mut rewritten_slot = Vec::with_capacity(slot.len());
        for raw in slot {
            let raw = raw.as_ref();
            let rewrite = rewrite_tag(raw).map_err(|source| TransformError::MalformedTag {
                function: function.to_string(),
                param_index,
                source,
            })?;
            match rewrite {
                TagRewrite::Unchanged => rewritten_slot.push(raw.to_string()),
                TagRewrite::Normalized {
                    tag,
                    source_kind,
                    issue,
                } => {
                    if let Some(kind) = issue {
                        let diagnostic = Diagnostic {
                            function: function.to_string(),
                            param_index,
                            source_kind,
                            tag: raw.to_string(),
                            kind,
                        };
                        warn!(
                            function = %function,
                            param_index,
                            tag = %raw,
                            issue = kind.label(),
                            "{diagnostic}"
                        );
                        outcome.diagnostics.push(diagnostic);
                    }
                    outcome.rewritten += 1;
                    rewritten_slot.push(tag.to_string());
                }
            }
        }
        outcome.annotation.push(rewritten_slot);
    }
    Ok(outcome)
}
