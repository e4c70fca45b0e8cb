use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod info;
mod locate;
mod merge;
mod validate;
mod viewport;

/// fuelmap - gasoline/gas injection map tool
#[derive(Parser)]
#[command(name = "fuelmap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Drawing surface settings shared by the geometry commands
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Load view settings from a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Drawing surface width in pixels
    #[arg(long)]
    width: Option<f64>,

    /// Drawing surface height in pixels
    #[arg(long)]
    height: Option<f64>,

    /// Padding around the plotting area in pixels
    #[arg(long)]
    padding: Option<f64>,

    /// Only plot the gasoline series
    #[arg(long, conflicts_with = "gas_only")]
    gasoline_only: bool,

    /// Only plot the gas series
    #[arg(long)]
    gas_only: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Display statistics of a map file
    Info {
        /// Input map file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Validate map file layout
    Validate {
        /// Map files to validate
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },

    /// Merge the gasoline series of one file with the gas series of another
    Merge {
        /// File providing the gasoline series
        #[arg(value_name = "GASOLINE")]
        gasoline: PathBuf,

        /// File providing the gas series
        #[arg(value_name = "GAS")]
        gas: PathBuf,

        /// Output path (defaults to <GAS stem>M.map next to GAS)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Compute the plot viewport, gridlines and labels for map files
    Viewport {
        /// Map files to plot
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,

        #[command(flatten)]
        view: ViewArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Find the map point under a screen position
    Locate {
        /// Screen x in pixels
        #[arg(value_name = "X", allow_negative_numbers = true)]
        x: f64,

        /// Screen y in pixels
        #[arg(value_name = "Y", allow_negative_numbers = true)]
        y: f64,

        /// Map files to search, in priority order
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        view: ViewArgs,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Info { file, json } => info::run(file, json),
        Commands::Validate { files } => validate::run(files),
        Commands::Merge {
            gasoline,
            gas,
            output,
        } => merge::run(gasoline, gas, output),
        Commands::Viewport { files, view, json } => viewport::run(files, view, json),
        Commands::Locate { x, y, files, view } => locate::run(x, y, files, view),
    }
}
