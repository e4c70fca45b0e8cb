use anyhow::Result;
use fuelmap::view::{Tick, Viewport};
use serde::Serialize;
use std::path::PathBuf;

use super::config::load_all;
use super::ViewArgs;

#[derive(Serialize)]
struct ViewportReport {
    viewport: Viewport,
    x_grid: Vec<Tick>,
    y_grid: Vec<Tick>,
    x_labels: Vec<Tick>,
    y_labels: Vec<Tick>,
}

/// Compute and print the plot geometry for the visible series of `files`
pub fn run(files: Vec<PathBuf>, view: ViewArgs, json: bool) -> Result<()> {
    let config = view.view_config()?;
    let files = load_all(&files, view.visibility())?;

    let series = files
        .iter()
        .flat_map(|file| file.visible_series().map(|(_, series)| series));
    let viewport = Viewport::compute(series, &config);

    let report = ViewportReport {
        viewport,
        x_grid: viewport.x_grid(),
        y_grid: viewport.y_grid(),
        x_labels: viewport.x_labels(),
        y_labels: viewport.y_labels(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Viewport");
    println!("========");
    println!("Files:  {}", files.len());
    println!(
        "X:      {:.4} .. {:.4} ({:.4} px/unit)",
        viewport.min_x(),
        viewport.max_x(),
        viewport.scale_x()
    );
    println!(
        "Y:      {:.4} .. {:.4} ({:.4} px/unit)",
        viewport.min_y(),
        viewport.max_y(),
        viewport.scale_y()
    );
    println!("Origin: ({}, {})", viewport.offset_x(), viewport.offset_y());
    println!("Hit tolerance: {:.4} data units", viewport.tolerance());
    println!();
    println!("Gridlines (step x={}, y={}):", viewport.x_grid_step(), viewport.y_grid_step());
    println!("  x: {}", join_values(&report.x_grid));
    println!("  y: {}", join_values(&report.y_grid));
    println!("Labels:");
    println!("  x: {}", join_labels(&report.x_labels));
    println!("  y: {}", join_labels(&report.y_labels));

    Ok(())
}

fn join_values(ticks: &[Tick]) -> String {
    ticks
        .iter()
        .map(|t| t.value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_labels(ticks: &[Tick]) -> String {
    ticks
        .iter()
        .map(|t| t.label.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
