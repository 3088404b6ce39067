//! Text rendering and user-facing messages for the CLI.

use std::fmt::Write as _;

use unicode_width::UnicodeWidthStr;

use crate::catalog;
use crate::config::Config;
use crate::error::{Error, Result, ValidationReason};
use crate::item::{ItemKind, ItemRecord};
use crate::query::SearchResults;
use crate::stats::Statistics;

use super::{ConfigCommand, OutputFormat};

/// Message shown to the user when a registration is rejected.
#[must_use]
pub fn validation_message(reason: ValidationReason) -> &'static str {
    match reason {
        ValidationReason::MissingField => "Please fill in all required fields.",
        ValidationReason::InvalidStatus => "Please choose whether the item was lost or found.",
        ValidationReason::InvalidCategory => {
            "Please choose a valid item category (see `lostfound catalog`)."
        }
        ValidationReason::InvalidLocation => {
            "Please choose a valid campus location (see `lostfound catalog`)."
        }
    }
}

/// Message shown to the user for a failed command.
#[must_use]
pub fn error_message(err: &Error) -> String {
    match err.validation_reason() {
        Some(reason) => validation_message(reason).to_string(),
        None => format!("Error: {err}"),
    }
}

/// Message shown to the user after a successful registration.
#[must_use]
pub fn registered_message(kind: ItemKind, record: &ItemRecord) -> String {
    format!(
        "{} \"{}\" has been registered (id {}).",
        kind.label(),
        record.name,
        record.id
    )
}

/// Render a single record as labelled lines.
#[must_use]
pub fn render_record(kind: ItemKind, record: &ItemRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ID:          {}", record.id);
    let _ = writeln!(out, "Type:        {}", kind.label());
    let _ = writeln!(out, "Name:        {}", record.name);
    let _ = writeln!(out, "Category:    {}", record.category);
    let _ = writeln!(out, "Place:       {}", record.place);
    let _ = writeln!(out, "Date:        {}", record.occurred_date);
    let _ = writeln!(out, "Contact:     {}", or_dash(&record.contact));
    let _ = writeln!(out, "Description: {}", or_dash(&record.description));
    let _ = writeln!(out, "Registered:  {}", record.created_at_display());
    out
}

/// Render search results in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_search(results: &SearchResults, format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(results)?,
        OutputFormat::Plain => {
            let mut out = String::new();
            for item in &results.items {
                let r = &item.record;
                let _ = writeln!(
                    out,
                    "[{}] #{} {} ({}, {}) {} - {}",
                    item.type_class,
                    r.id,
                    r.name,
                    r.category,
                    r.place,
                    r.occurred_date,
                    r.created_at_display()
                );
            }
            let _ = writeln!(out, "{} item(s) found", results.total_count);
            out
        }
        OutputFormat::Table => {
            let header = ["ID", "TYPE", "NAME", "CATEGORY", "PLACE", "DATE", "REGISTERED"];
            let rows: Vec<[String; 7]> = results
                .items
                .iter()
                .map(|item| {
                    let r = &item.record;
                    [
                        r.id.to_string(),
                        item.type_label.to_string(),
                        r.name.clone(),
                        r.category.clone(),
                        r.place.clone(),
                        r.occurred_date.clone(),
                        r.created_at_display(),
                    ]
                })
                .collect();
            let mut out = table(&header, &rows);
            let _ = writeln!(out, "\n{} item(s) found", results.total_count);
            out
        }
    };
    Ok(out)
}

/// Render statistics as text or JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_statistics(stats: &Statistics, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(stats)?);
    }

    let mut out = String::new();
    let _ = writeln!(out, "Lost items:  {}", stats.total_lost);
    let _ = writeln!(out, "Found items: {}", stats.total_found);
    let _ = writeln!(out);

    let rows: Vec<[String; 3]> = stats
        .per_category_lost
        .iter()
        .zip(&stats.per_category_found)
        .map(|(lost, found)| {
            [
                lost.category.to_string(),
                lost.count.to_string(),
                found.count.to_string(),
            ]
        })
        .collect();
    out.push_str(&table(&["CATEGORY", "LOST", "FOUND"], &rows));

    let _ = writeln!(out);
    if stats.per_location.is_empty() {
        let _ = writeln!(out, "No items registered at any location.");
    } else {
        let rows: Vec<[String; 3]> = stats
            .per_location
            .iter()
            .map(|l| [l.location.to_string(), l.lost.to_string(), l.found.to_string()])
            .collect();
        out.push_str(&table(&["LOCATION", "LOST", "FOUND"], &rows));
    }
    Ok(out)
}

/// Render the category and location catalogs.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_catalog(json: bool) -> Result<String> {
    if json {
        let value = serde_json::json!({
            "categories": catalog::list_categories(),
            "locations": catalog::list_locations(),
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut out = String::from("Categories:\n");
    for category in catalog::list_categories() {
        let _ = writeln!(out, "  {category}");
    }
    out.push_str("\nLocations:\n");
    for location in catalog::list_locations() {
        let _ = writeln!(out, "  {location}");
    }
    Ok(out)
}

/// Render the output of a `config` subcommand.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_config(config: &Config, cmd: &ConfigCommand) -> Result<String> {
    let mut out = String::new();
    match cmd {
        ConfigCommand::Show { json: true } => {
            out = serde_json::to_string_pretty(config)?;
            out.push('\n');
        }
        ConfigCommand::Show { json: false } => {
            let seed_file = config
                .registry
                .seed_file
                .as_ref()
                .map_or_else(|| "-".to_string(), |p| p.display().to_string());
            let _ = writeln!(out, "Current Configuration");
            let _ = writeln!(out, "=====================");
            let _ = writeln!(out);
            let _ = writeln!(out, "[Registry]");
            let _ = writeln!(out, "  Seed sample data:   {}", config.registry.seed_sample_data);
            let _ = writeln!(out, "  Seed file:          {seed_file}");
            let _ = writeln!(out);
            let _ = writeln!(out, "[Search]");
            let _ = writeln!(out, "  Default type:       {}", config.search.default_type);
        }
        ConfigCommand::Path => {
            let _ = writeln!(out, "{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.clone().unwrap_or_else(Config::default_config_path);
            let _ = writeln!(out, "Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => {
                    let _ = writeln!(out, "Configuration is valid.");
                }
                Err(e) => {
                    let _ = writeln!(out, "Configuration error: {e}");
                }
            }
        }
    }
    Ok(out)
}

fn or_dash(text: &str) -> &str {
    if text.is_empty() {
        "-"
    } else {
        text
    }
}

fn table<const N: usize>(header: &[&str; N], rows: &[[String; N]]) -> String {
    let mut widths: [usize; N] = std::array::from_fn(|i| header[i].width());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    write_row(&mut out, header.iter().copied(), &widths);
    for row in rows {
        write_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

// Pads by terminal display width, so CJK names take two columns per character.
fn write_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.zip(widths.iter().copied()).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        line.extend(std::iter::repeat(' ').take(width.saturating_sub(cell.width())));
    }
    let _ = writeln!(out, "{}", line.trim_end());
}
