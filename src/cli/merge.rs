use anyhow::{Context, Result};
use fuelmap::map::{merge, merged_file_name, write_map, MapFile};
use log::info;
use std::path::PathBuf;

/// Merge the gasoline series of one file with the gas series of another
pub fn run(gasoline: PathBuf, gas: PathBuf, output: Option<PathBuf>) -> Result<()> {
    for input in [&gasoline, &gas] {
        if !input.exists() {
            anyhow::bail!("Input file does not exist: {}", input.display());
        }
    }

    let gasoline_file = MapFile::load(&gasoline)
        .with_context(|| format!("Failed to load gasoline map: {}", gasoline.display()))?;
    let gas_file =
        MapFile::load(&gas).with_context(|| format!("Failed to load gas map: {}", gas.display()))?;

    let output = output.unwrap_or_else(|| gas.with_file_name(merged_file_name(&gas_file.name)));

    info!("Gasoline: {}", gasoline.display());
    info!("Gas:      {}", gas.display());
    info!("Output:   {}", output.display());

    let merged = merge(&gasoline_file.map, &gas_file.map).context("Merge failed")?;
    write_map(&output, &merged)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("{}", output.display());
    Ok(())
}
