use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use svr_cli::logging::redact_value;
use svr_cli::pipeline::ConvertOutcome;
use svr_model::{Issue, NormalizedDataset};
use svr_normalize::NormalizeError;
use svr_output::dataset_digest;

pub fn print_summary(outcome: &ConvertOutcome) {
    println!("Document: {}", outcome.document.display());
    if let Some(path) = &outcome.output {
        println!("Output: {}", path.display());
    }
    match &outcome.result {
        Ok(dataset) => print_dataset_table(outcome.observations, dataset),
        Err(error) => print_rejection(outcome.observations, error),
    }
}

fn print_dataset_table(observations: usize, dataset: &NormalizedDataset) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table, 80);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Status"), status_cell(true)]);
    table.add_row(vec![Cell::new("Observations"), Cell::new(observations)]);
    table.add_row(vec![Cell::new("Rows"), Cell::new(dataset.row_count())]);
    table.add_row(vec![
        Cell::new("Feature count"),
        dataset
            .feature_count()
            .map_or_else(|| dim_cell("-"), Cell::new),
    ]);
    table.add_row(vec![
        Cell::new("Distinct dependent labels"),
        Cell::new(dataset.distinct_dependent_labels().len()),
    ]);
    table.add_row(vec![
        Cell::new("Distinct features"),
        Cell::new(dataset.distinct_features().len()),
    ]);
    table.add_row(vec![
        Cell::new("Digest"),
        dim_cell(&dataset_digest(dataset)[..16]),
    ]);
    println!("{table}");
}

fn print_rejection(observations: usize, error: &NormalizeError) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table, 80);
    table.add_row(vec![Cell::new("Status"), status_cell(false)]);
    table.add_row(vec![Cell::new("Observations"), Cell::new(observations)]);
    table.add_row(vec![
        Cell::new("Location"),
        Cell::new(
            error
                .location()
                .map_or_else(|| "document structure".to_string(), ToString::to_string),
        ),
    ]);
    println!("{table}");
    print_issue_table(&error.issues());
}

fn print_issue_table(issues: &[Issue]) {
    if issues.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Category"),
        header_cell("Value"),
        header_cell("Check"),
    ]);
    apply_table_style(&mut table, 120);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 1, CellAlignment::Center);
    for issue in issues {
        table.add_row(vec![
            Cell::new(issue.rule_id())
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
            Cell::new(issue.category()),
            value_cell(issue.value()),
            Cell::new(issue.check_description()),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

fn apply_table_style(table: &mut Table, width: u16) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(width);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(accepted: bool) -> Cell {
    if accepted {
        Cell::new("ACCEPTED")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("REJECTED")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn value_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("(empty)")
    } else {
        Cell::new(redact_value(value))
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
