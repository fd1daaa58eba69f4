use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use annot_model::Diagnostic;
use annot_validate::{CheckReport, Finding, Severity};

use annot_cli::pipeline::ConvertResult;

pub fn print_summary(result: &ConvertResult) {
    if result.written {
        println!("Output: {}", result.output.display());
    } else {
        println!("Output: {} (dry run, not written)", result.output.display());
    }
    let conversion = &result.conversion;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Entries"),
        header_cell("Inserted"),
        header_cell("Overwritten"),
        header_cell("Unsplit"),
        header_cell("Tags"),
        header_cell("Rewritten"),
        header_cell("Diagnostics"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..8 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut total_entries = 0usize;
    let mut total_inserted = 0usize;
    let mut total_unsplit = 0usize;
    for source in &conversion.sources {
        total_entries += source.entries;
        total_inserted += source.inserted;
        total_unsplit += source.unsplit_keys;
        table.add_row(vec![
            Cell::new(source.path.display()),
            Cell::new(source.entries),
            Cell::new(source.inserted),
            count_cell(source.overwritten, Color::Yellow),
            count_cell(source.unsplit_keys, Color::DarkYellow),
            Cell::new(source.tags),
            count_cell(source.rewritten, Color::Green),
            count_cell(source.diagnostics, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new(format!("TOTAL ({} functions)", conversion.mapping.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_entries).add_attribute(Attribute::Bold),
        Cell::new(total_inserted).add_attribute(Attribute::Bold),
        count_cell(conversion.overwritten_count(), Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(total_unsplit, Color::DarkYellow).add_attribute(Attribute::Bold),
        Cell::new(conversion.tag_count()).add_attribute(Attribute::Bold),
        count_cell(conversion.rewritten_count(), Color::Green).add_attribute(Attribute::Bold),
        count_cell(conversion.diagnostics.len(), Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_diagnostic_table(&conversion.diagnostics);
    if let Some(report) = &result.check {
        print_check_report(report);
    }
}

fn print_diagnostic_table(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Function"),
        header_cell("Param"),
        header_cell("Tag"),
        header_cell("Issue"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for diagnostic in diagnostics {
        table.add_row(vec![
            Cell::new(&diagnostic.function)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(diagnostic.param_index),
            Cell::new(&diagnostic.tag),
            Cell::new(diagnostic.kind.label()).fg(Color::Yellow),
            Cell::new(diagnostic.message()),
        ]);
    }
    println!();
    println!("Diagnostics:");
    println!("{table}");
}

/// Print check findings, errors first.
pub fn print_check_report(report: &CheckReport) {
    println!();
    println!(
        "Checked {} entries: {} errors, {} warnings",
        report.entries,
        report.error_count(),
        report.warning_count()
    );
    if report.findings.is_empty() {
        return;
    }
    let mut findings: Vec<&Finding> = report.findings.iter().collect();
    findings.sort_by_key(|finding| std::cmp::Reverse(severity_rank(finding.issue.severity())));
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Function"),
        header_cell("Severity"),
        header_cell("Code"),
        header_cell("Slot"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    for finding in findings {
        let slot = match finding.issue.slot() {
            Some(slot) => Cell::new(slot),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(&finding.function)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            severity_cell(finding.issue.severity()),
            Cell::new(finding.issue.code()),
            slot,
            Cell::new(finding.issue.message()),
        ]);
    }
    println!("{table}");
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 8 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(11)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(11)),
        ]);
    }
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::UpperBoundary(Width::Fixed(16)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR").fg(Color::Red),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn severity_rank(severity: Severity) -> u8 {
    match severity {
        Severity::Error => 2,
        Severity::Warning => 1,
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
