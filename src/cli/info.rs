use anyhow::{Context, Result};
use fuelmap::map::{MapFile, SeriesKind, SeriesStats};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct SeriesSummary {
    series: SeriesKind,
    #[serde(flatten)]
    stats: SeriesStats,
}

/// Display information about a map file
pub fn run(file: PathBuf, json: bool) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let map_file = MapFile::load(&file).context("Failed to parse map file")?;
    let summaries: Vec<SeriesSummary> = [SeriesKind::Primary, SeriesKind::Secondary]
        .into_iter()
        .map(|kind| SeriesSummary {
            series: kind,
            stats: map_file.map.series(kind).stats(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!("Map File Information");
    println!("====================");
    println!("File: {}", file.display());
    println!("Records: {}", map_file.map.primary().len());
    println!();

    for summary in &summaries {
        let stats = &summary.stats;
        println!("{} series:", summary.series);
        println!("  Points:    {}", stats.count);
        println!("  Pressure:  {} .. {}", stats.min_x, stats.max_x);
        println!("  Injection: {} .. {}", stats.min_y, stats.max_y);
    }

    Ok(())
}
