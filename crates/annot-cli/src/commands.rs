use anyhow::Result;
use comfy_table::{Cell, Table};
use tracing::info_span;

use annot_model::{ConvertOptions, SourceKind, TaintMode};
use annot_transform::target_tag;
use annot_validate::CheckReport;

use annot_cli::pipeline::{ConvertRequest, ConvertResult, run_check, run_conversion};

use crate::cli::{CheckArgs, ConvertArgs};
use crate::summary::{apply_table_style, header_cell};

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let span = info_span!("run", taint = args.taint, input_count = args.inputs.len());
    let _guard = span.enter();
    let request = ConvertRequest {
        inputs: args.inputs.clone(),
        output: args.output.clone(),
        options: ConvertOptions::new().with_taint(TaintMode::from_flag(args.taint)),
        dry_run: args.dry_run,
        check: args.check,
    };
    run_conversion(&request)
}

pub fn run_check_file(args: &CheckArgs) -> Result<CheckReport> {
    run_check(&args.file)
}

pub fn run_tags() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source kind"),
        header_cell("Target tag"),
        header_cell("Fields kept"),
    ]);
    apply_table_style(&mut table);
    for kind in SourceKind::ALL {
        let kept = match kind {
            SourceKind::TaintPropagation => "data",
            _ => "none",
        };
        table.add_row(vec![
            Cell::new(kind),
            Cell::new(target_tag(kind, "<data>")),
            Cell::new(kept),
        ]);
    }
    println!("{table}");
    Ok(())
}
