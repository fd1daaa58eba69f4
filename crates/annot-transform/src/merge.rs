//! Merging of source documents into one target mapping.

use std::path::PathBuf;

use tracing::{debug, info, info_span};

use annot_model::{ConvertOptions, Diagnostic, OutputEntry, OutputMapping, SourceDocument};

use crate::error::Result;
use crate::rewrite::rewrite_annotation;
use crate::split::split_function_key;

/// Per-document merge statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceSummary {
    pub path: PathBuf,
    pub entries: usize,
    /// Mangled names seen for the first time.
    pub inserted: usize,
    /// Entries that replaced an earlier one with the same mangled name.
    pub overwritten: usize,
    /// Keys without a `(mangled)` suffix.
    pub unsplit_keys: usize,
    pub tags: usize,
    pub rewritten: usize,
    pub diagnostics: usize,
}

/// The merged mapping plus everything reported while building it.
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    pub mapping: OutputMapping,
    pub sources: Vec<SourceSummary>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Conversion {
    pub fn tag_count(&self) -> usize {
        self.sources.iter().map(|source| source.tags).sum()
    }

    pub fn rewritten_count(&self) -> usize {
        self.sources.iter().map(|source| source.rewritten).sum()
    }

    pub fn overwritten_count(&self) -> usize {
        self.sources.iter().map(|source| source.overwritten).sum()
    }
}

/// Merge one document into `mapping`.
///
/// Each key is split, its annotation rewritten when taint normalization is
/// on, and the entry stored under the mangled name. An existing entry with
/// the same mangled name is replaced whole. Diagnostics are appended to
/// `diagnostics`.
pub fn merge_document(
    mapping: &mut OutputMapping,
    document: &SourceDocument,
    options: &ConvertOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<SourceSummary> {
    let span = info_span!("source", path = %document.path.display());
    let _guard = span.enter();

    let mut summary = SourceSummary {
        path: document.path.clone(),
        entries: document.len(),
        ..SourceSummary::default()
    };
    for (key, annotation) in &document.entries {
        let name = split_function_key(key);
        if !name.matched {
            summary.unsplit_keys += 1;
            debug!(key = %key, "key has no mangled segment");
        }
        summary.tags += annotation.iter().map(Vec::len).sum::<usize>();

        let annotation = if options.taint.is_normalize() {
            let outcome = rewrite_annotation(annotation, &name.display)?;
            summary.rewritten += outcome.rewritten;
            summary.diagnostics += outcome.diagnostics.len();
            diagnostics.extend(outcome.diagnostics);
            outcome.annotation
        } else {
            annotation.clone()
        };

        let entry = OutputEntry::new(name.display, annotation);
        match mapping.upsert(name.mangled.as_str(), entry) {
            Some(previous) => {
                summary.overwritten += 1;
                debug!(
                    mangled = %name.mangled,
                    previous_name = %previous.name,
                    "entry overwritten"
                );
            }
            None => summary.inserted += 1,
        }
    }

    info!(
        entry_count = summary.entries,
        inserted = summary.inserted,
        overwritten = summary.overwritten,
        diagnostic_count = summary.diagnostics,
        "merged source annotations"
    );
    Ok(summary)
}

/// Merge documents in order into a fresh mapping; later documents win.
pub fn convert(documents: &[SourceDocument], options: &ConvertOptions) -> Result<Conversion> {
    let mut conversion = Conversion::default();
    for document in documents {
        let summary = merge_document(
            &mut conversion.mapping,
            document,
            options,
            &mut conversion.diagnostics,
        )?;
        conversion.sources.push(summary);
    }
    Ok(conversion)
}
