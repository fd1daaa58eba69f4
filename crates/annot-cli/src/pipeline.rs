//! Conversion pipeline stages.
//!
//! Stages run in order and the output file is touched only after every
//! input has been loaded and merged:
//!
//! 1. **Ingest**: decode every source document
//! 2. **Convert**: split keys, rewrite tags, merge with last file winning
//! 3. **Check**: optionally lint the merged mapping
//! 4. **Output**: write the target document unless this is a dry run

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use annot_ingest::{load_source_documents, read_json_object};
use annot_model::ConvertOptions;
use annot_output::write_mapping;
use annot_transform::{Conversion, convert};
use annot_validate::{CheckReport, check_document, check_mapping};

/// Everything a conversion run needs.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    pub options: ConvertOptions,
    pub dry_run: bool,
    pub check: bool,
}

impl ConvertRequest {
    pub fn new(inputs: Vec<PathBuf>, output: PathBuf) -> Self {
        Self {
            inputs,
            output,
            options: ConvertOptions::default(),
            dry_run: false,
            check: false,
        }
    }
}

/// Outcome of a conversion run.
#[derive(Debug)]
pub struct ConvertResult {
    pub output: PathBuf,
    pub conversion: Conversion,
    pub check: Option<CheckReport>,
    /// False for dry runs.
    pub written: bool,
}

impl ConvertResult {
    pub fn has_errors(&self) -> bool {
        self.check.as_ref().is_some_and(CheckReport::has_errors)
    }
}

/// Run ingest, convert, check and output.
///
/// # Errors
///
/// Fails on the first unreadable or malformed input, on a malformed taint
/// tag, or when the output cannot be written. No output is written when
/// any earlier stage fails.
pub fn run_conversion(request: &ConvertRequest) -> Result<ConvertResult> {
    let span = info_span!("convert", output = %request.output.display());
    let _guard = span.enter();

    let documents =
        load_source_documents(&request.inputs).context("load source annotations")?;
    let conversion =
        convert(&documents, &request.options).context("convert source annotations")?;
    info!(
        source_count = conversion.sources.len(),
        function_count = conversion.mapping.len(),
        rewritten = conversion.rewritten_count(),
        diagnostic_count = conversion.diagnostics.len(),
        "conversion complete"
    );

    let check = request.check.then(|| check_mapping(&conversion.mapping));
    if let Some(report) = &check {
        info!(
            error_count = report.error_count(),
            warning_count = report.warning_count(),
            "checked merged annotations"
        );
    }

    let written = !request.dry_run;
    if written {
        write_mapping(&request.output, &conversion.mapping)
            .context("write target annotations")?;
    } else {
        info!("dry run, output not written");
    }

    Ok(ConvertResult {
        output: request.output.clone(),
        conversion,
        check,
        written,
    })
}

/// Load a target document and lint it.
///
/// # Errors
///
/// Fails when the file cannot be read or is not a JSON object.
pub fn run_check(path: &Path) -> Result<CheckReport> {
    let span = info_span!("check", path = %path.display());
    let _guard = span.enter();

    let document = read_json_object(path).context("load target annotations")?;
    let report = check_document(&document);
    info!(
        entry_count = report.entries,
        error_count = report.error_count(),
        warning_count = report.warning_count(),
        "checked annotations"
    );
    Ok(report)
}
