use anyhow::Result;
use log::info;
use std::path::PathBuf;

/// Validate map files, exiting with status 1 if any of them fails
pub fn run(files: Vec<PathBuf>) -> Result<()> {
    use fuelmap::validator::validate_map_file;

    info!("Validating {} map file(s)", files.len());

    let mut failed = false;
    for file in &files {
        match validate_map_file(file) {
            Ok(report) => {
                println!("{}", report.format_colored());
                failed |= report.has_failures();
            }
            Err(e) => {
                eprintln!("Validation error for {}: {}", file.display(), e);
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }

    Ok(())
}
