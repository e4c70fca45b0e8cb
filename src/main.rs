//! # fuelmap
//!
//! Command-line tool for inspecting, validating and merging injection map
//! files.
//!
//! ## Usage
//!
//! ```bash
//! # Show series statistics
//! fuelmap info winter.map
//!
//! # Gasoline from summer.map, gas from winter.map -> winterM.map
//! fuelmap merge summer.map winter.map
//!
//! # Plot geometry and point lookup
//! fuelmap viewport summer.map winter.map --width 1024 --height 768
//! fuelmap locate 300 200 summer.map winter.map
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
