use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use matbench_utils::{ColumnComparison, TargetKind};

use crate::commands::{ColumnKind, MetricDirection};

pub fn print_metrics(metrics: &[MetricDirection]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Better")]);
    apply_table_style(&mut table);
    for metric in metrics {
        table.add_row(vec![
            Cell::new(&metric.name),
            direction_cell(metric.greater_is_better),
        ]);
    }
    println!("{table}");
}

pub fn print_comparison(comparison: &ColumnComparison) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Only in")]);
    apply_table_style(&mut table);
    for name in &comparison.df1_not_in_df2 {
        table.add_row(vec![Cell::new(name), Cell::new("left")]);
    }
    for name in &comparison.df2_not_in_df1 {
        table.add_row(vec![Cell::new(name), Cell::new("right")]);
    }
    if comparison.mismatch {
        println!("{table}");
        println!("Columns differ.");
    } else {
        println!("Columns match.");
    }
}

pub fn print_target_types(kinds: &[ColumnKind]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Target type")]);
    apply_table_style(&mut table);
    for entry in kinds {
        table.add_row(vec![Cell::new(&entry.column), kind_cell(entry.kind)]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn direction_cell(greater_is_better: bool) -> Cell {
    if greater_is_better {
        Cell::new("higher").fg(Color::Green)
    } else {
        Cell::new("lower").fg(Color::Yellow)
    }
}

fn kind_cell(kind: TargetKind) -> Cell {
    match kind {
        TargetKind::Regression => Cell::new(kind).fg(Color::Blue),
        TargetKind::Classification => Cell::new(kind).fg(Color::Magenta),
    }
}
