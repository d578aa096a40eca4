//! Textual rendering of an analysis report.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use metacorr_cli::analysis::AnalysisReport;

pub fn print_summary(report: &AnalysisReport) {
    println!("Source: {}", report.source);
    println!(
        "Studies: {} used, {} dropped",
        report.studies_used, report.rows_dropped
    );

    let mut table = Table::new();
    table.set_header(vec![header_cell("Statistic"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    let meta = &report.meta;
    table.add_row(vec![
        Cell::new("Population correlation estimate"),
        value_cell(meta.pooled_r, 3),
    ]);
    table.add_row(vec![
        Cell::new("Weighted SD"),
        value_cell(meta.weighted_sd, 3),
    ]);
    table.add_row(vec![
        Cell::new("Standard error"),
        value_cell(meta.standard_error, 3),
    ]);
    table.add_row(vec![
        Cell::new("Z-statistic"),
        value_cell(meta.z_statistic, 3),
    ]);
    table.add_row(vec![Cell::new("p-value"), value_cell(meta.p_value, 5)]);
    if let Some(bootstrap) = &report.bootstrap {
        table.add_row(vec![
            Cell::new("Bootstrap 95% CI"),
            Cell::new(format!("[{}, {}]", bootstrap.lower_ci, bootstrap.upper_ci)),
        ]);
        table.add_row(vec![
            Cell::new("Resamples"),
            dim_cell(bootstrap.iterations()),
        ]);
    }
    println!("{table}");

    if meta.is_degenerate() {
        println!(
            "Note: standard error is zero (single study or identical correlations); \
             Z and p are not interpretable."
        );
    }
}

fn value_cell(value: f64, decimals: usize) -> Cell {
    if value.is_finite() {
        Cell::new(format!("{value:.decimals$}"))
    } else {
        Cell::new("n/a").fg(Color::Yellow)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(60);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
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
