//! Output rendering for text, JSON and YAML modes.

use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use console::style;
use serde::Serialize;
use serde_json::Value;

use crate::models::{CellFormat, Column, OutputFormat, Record, Resource};
use crate::utils::{MISSING, to_utc_iso8601};

/// Fields rendered as timestamps wherever they appear.
const TIMESTAMP_FIELDS: &[&str] = &["created_time", "updated_time", "start_time", "end_time"];

/// Serialize a value in a structured format.
pub fn render_structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        OutputFormat::Json | OutputFormat::Text => Ok(serde_json::to_string_pretty(value)?),
    }
}

/// Print a value as JSON or YAML.
pub fn emit<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    let rendered = render_structured(value, format)?;
    println!("{}", rendered.trim_end());
    Ok(())
}

pub fn print_success(message: &str) {
    println!("{}", style(message).green());
}

pub fn print_warning(message: &str) {
    println!("{}", style(message).yellow());
}

pub fn print_failure(message: &str) {
    eprintln!("{}", style(message).red());
}

/// Render a JSON value as a single cell string.
pub fn value_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => MISSING.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn pairs_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::Object(map)) if !map.is_empty() => map
            .iter()
            .map(|(k, v)| format!("{}={}", k, value_text(Some(v))))
            .collect::<Vec<_>>()
            .join("\n"),
        Some(Value::Object(_)) => String::new(),
        other => value_text(other),
    }
}

fn lines_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| value_text(Some(v)))
            .collect::<Vec<_>>()
            .join("\n"),
        other => value_text(other),
    }
}

/// Render one field of a record for a list column.
pub fn cell_text(record: &Record, column: &Column) -> String {
    let value = record.get(column.field);
    match column.format {
        CellFormat::Text => value_text(value),
        CellFormat::Timestamp => to_utc_iso8601(value),
        CellFormat::Pairs => pairs_text(value),
        CellFormat::Lines => lines_text(value),
    }
}

/// Render any field of a record for the details table.
pub fn field_text(field: &str, value: &Value) -> String {
    if TIMESTAMP_FIELDS.contains(&field) {
        return to_utc_iso8601(Some(value));
    }
    match value {
        Value::Object(_) => pairs_text(Some(value)),
        Value::Array(_) => lines_text(Some(value)),
        _ => value_text(Some(value)),
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Field/value table for a single record.
pub fn details_table(resource: &Resource, record: &Record) -> String {
    let title = value_text(record.get(resource.title_field));

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Field").fg(Color::Cyan),
        Cell::new("Value").fg(Color::Magenta),
    ]);
    for (field, value) in record {
        table.add_row(vec![
            Cell::new(field).fg(Color::Cyan),
            Cell::new(field_text(field, value)),
        ]);
    }

    format!("{} Details: {}\n{}", resource.label, title, table)
}

/// Column table for a page of records.
pub fn list_table(resource: &Resource, records: &[Record]) -> String {
    let mut table = new_table();
    table.set_header(
        resource
            .columns
            .iter()
            .map(|c| Cell::new(c.header).fg(Color::Cyan)),
    );
    for record in records {
        table.add_row(
            resource
                .columns
                .iter()
                .map(|column| Cell::new(cell_text(record, column))),
        );
    }

    format!("{}\n{}", resource.plural, table)
}
