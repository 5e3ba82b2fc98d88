use std::io::Write;

use anyhow::Result;
use bam_lib::types::Record;
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Unknown values fall back to a table.
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

// -- Record output --

/// Union of field names across records, in first-seen order.
fn collect_columns(records: &[Record]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

fn build_rows(records: &[Record], columns: &[String]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|r| {
            columns
                .iter()
                .map(|c| r.get(c).map(|v| v.to_string()).unwrap_or_default())
                .collect()
        })
        .collect()
}

fn records_table(records: &[Record]) -> Table {
    let columns = collect_columns(records);
    let mut builder = Builder::default();
    builder.push_record(columns.clone());
    for row in build_rows(records, &columns) {
        builder.push_record(row);
    }
    builder.build()
}

pub fn render_records_table(records: &[Record]) -> String {
    records_table(records).to_string()
}

pub fn render_records_markdown(records: &[Record]) -> String {
    let mut table = records_table(records);
    table.with(Style::markdown());
    table.to_string()
}

pub fn write_records_csv<W: Write>(records: &[Record], writer: W) -> Result<()> {
    let columns = collect_columns(records);
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(&columns)?;
    for row in build_rows(records, &columns) {
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints records in the requested format. An empty result is reported on
/// stderr so machine-readable stdout stays valid.
pub fn print_records(records: &[Record], format: &OutputFormat) -> Result<()> {
    if records.is_empty() {
        eprintln!("No data available for this query");
        if *format == OutputFormat::Json {
            print_json(&records);
        }
        return Ok(());
    }
    eprintln!("{} records", records.len());

    match format {
        OutputFormat::Table => println!("{}", render_records_table(records)),
        OutputFormat::Markdown => println!("{}", render_records_markdown(records)),
        OutputFormat::Json => print_json(&records),
        OutputFormat::Csv => write_records_csv(records, std::io::stdout())?,
    }
    Ok(())
}

// -- Fixed-shape listings --

/// Prints rows that derive both `Tabled` and `Serialize`.
pub fn print_rows<T: Tabled + Serialize>(rows: &[T], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
