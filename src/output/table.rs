use std::path::Path;

use comfy_table::{Cell, Color, Table};

use crate::app::{PublishOutcome, StatusEntry};
use crate::error::PublishError;
use crate::manifest::Manifest;
use crate::output::format::{create_styled_table, header_cell, paint, styled_cell};

fn plot_table(manifest: &Manifest, use_color: bool) -> Table {
    let mut table = create_styled_table();
    table.set_header(vec![header_cell("ID", use_color), header_cell("Image", use_color)]);
    for (id, path) in manifest.iter() {
        table.add_row(vec![styled_cell(id, None, true), Cell::new(path)]);
    }
    table
}

/// Print the plots generated by this run
pub(crate) fn print_plot_table(manifest: &Manifest, use_color: bool) {
    println!("\n  Generated Plots\n");
    println!("{}", plot_table(manifest, use_color));
    println!("\n  {} plots\n", manifest.len());
}

fn publish_line(outcome: &PublishOutcome, use_color: bool) -> String {
    match outcome {
        PublishOutcome::Pushed(report) => format!(
            "  {} to {}/{}: {}",
            paint("Pushed", "32", use_color),
            report.remote,
            report.branch,
            report.message
        ),
        PublishOutcome::Skipped => format!("  {}", paint("Publish skipped", "33", use_color)),
        PublishOutcome::Failed(err @ PublishError::ToolMissing { .. }) => {
            format!("  {}: {err}", paint("Publish unavailable", "31", use_color))
        }
        PublishOutcome::Failed(err) => {
            format!("  {}: {err}", paint("Publish failed", "31", use_color))
        }
    }
}

/// One-line summary of the publish step
pub(crate) fn print_publish_line(outcome: &PublishOutcome, use_color: bool) {
    println!("{}", publish_line(outcome, use_color));
}

fn status_table(entries: &[StatusEntry], use_color: bool) -> Table {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("ID", use_color),
        header_cell("Image", use_color),
        header_cell("On disk", use_color),
    ]);
    for entry in entries {
        let (label, color) = if entry.exists {
            ("yes", Color::Green)
        } else {
            ("missing", Color::Red)
        };
        table.add_row(vec![
            styled_cell(&entry.id, None, true),
            Cell::new(&entry.path),
            styled_cell(label, use_color.then_some(color), false),
        ]);
    }
    table
}

/// Print manifest entries with their on-disk state
pub(crate) fn print_status_table(
    manifest_path: &Path,
    entries: &[StatusEntry],
    accumulated: usize,
    use_color: bool,
) {
    if entries.is_empty() {
        println!("No manifest entries in {}.", manifest_path.display());
    } else {
        println!("\n  Manifest {}\n", manifest_path.display());
        println!("{}", status_table(entries, use_color));
    }
    println!("\n  {accumulated} plot images on disk\n");
}
