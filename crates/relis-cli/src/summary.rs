use std::fmt::Write;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use relis_model::{ClassificationField, DataType, StatisticalFunction};
use relis_cli::types::ModelRun;

/// Field table and exclusion lists of one model run.
pub fn render_summary(run: &ModelRun) -> String {
    let assembly = &run.assembly;
    let environment = run.config.environment();
    let mut out = String::new();
    let _ = writeln!(out, "Project: {}", environment.project_name);
    if let Some(path) = &run.output {
        let _ = writeln!(out, "Render context: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Title"),
        header_cell("Data type"),
        header_cell("Multiple"),
        header_cell("Statistics"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Right);
    for field in assembly.sam.fields() {
        table.add_row(vec![
            Cell::new(&field.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&field.title),
            data_type_cell(field.data_type),
            multiple_cell(field),
            count_cell(field.statistics.len()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{} nominal, {} continuous",
            assembly.sam.count_of(DataType::Nominal),
            assembly.sam.count_of(DataType::Continuous)
        ))
        .fg(Color::Cyan),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(assembly.sam.len()).add_attribute(Attribute::Bold),
    ]);
    let _ = writeln!(out, "{table}");

    write_name_list(&mut out, "Excluded as unclassifiable", &assembly.unclassifiable);
    for rejected in &assembly.rejected {
        let _ = writeln!(out, "Rejected: {}", rejected.error);
    }
    write_name_list(&mut out, "Removed metadata fields", &assembly.removed_metadata);
    write_name_list(&mut out, "Added static fields", &assembly.added_static);
    let empty: Vec<String> = assembly
        .fields_without_statistics()
        .into_iter()
        .map(String::from)
        .collect();
    write_name_list(&mut out, "Fields without applicable statistics", &empty);
    let _ = writeln!(out, "{}", assembly.summary());
    out
}

/// The statistical function catalog as a table.
pub fn render_catalog(catalog: &[StatisticalFunction]) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Function"),
        header_cell("Title"),
        header_cell("Type"),
        header_cell("Data type"),
        header_cell("Returns"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    for function in catalog {
        table.add_row(vec![
            Cell::new(&function.name),
            Cell::new(&function.title),
            Cell::new(function.analysis_type),
            data_type_cell(function.data_type),
            Cell::new(function.return_data_type),
        ]);
    }
    table.to_string()
}

fn write_name_list(out: &mut String, label: &str, names: &[String]) {
    if names.is_empty() {
        return;
    }
    let _ = writeln!(out, "{label}: {}", names.join(", "));
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn data_type_cell(data_type: DataType) -> Cell {
    match data_type {
        DataType::Nominal => Cell::new(data_type).fg(Color::Green),
        DataType::Continuous => Cell::new(data_type).fg(Color::Magenta),
    }
}

fn multiple_cell(field: &ClassificationField) -> Cell {
    if field.multiple {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        Cell::new(count).fg(Color::Yellow).add_attribute(Attribute::Bold)
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
