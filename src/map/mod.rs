//! # Map Module
//!
//! Reading, validating and recombining injection map files.
//!
//! A map file is plain text with exactly 480 lines. Each line holds one
//! decimal number written with `,` as the decimal separator, and the lines
//! form 120 consecutive four-line records:
//!
//! ```text
//! primary x      (gasoline manifold pressure)
//! primary y      (gasoline injection time)
//! secondary x    (gas manifold pressure)
//! secondary y    (gas injection time)
//! ```
//!
//! Parsing yields a [`FuelMap`] holding both series in row order. Merging
//! takes the primary series of one map and the secondary series of another
//! and writes them back into the same layout.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fuelmap::map::{merge, FuelMap};
//!
//! let gasoline = FuelMap::from_file("summer.map")?;
//! let gas = FuelMap::from_file("winter.map")?;
//!
//! let merged = merge(&gasoline, &gas)?;
//! fuelmap::map::write_map("winterM.map", &merged)?;
//! # Ok::<(), fuelmap::map::MapError>(())
//! ```

mod error;
mod file;
mod merger;
mod model;
mod parser;

#[cfg(test)]
mod tests;

pub use error::{LayoutError, MapError};
pub use file::{
    is_map_file, merged_file_name, visible_candidates, write_map, MapFile, SeriesRef, Visibility,
};
pub use merger::{merge, merge_series};
pub use model::{FuelMap, Point, Series, SeriesKind, SeriesStats};
pub use parser::{parse, split_lines};

/// Number of records (rows) in a map file
pub const RECORD_COUNT: usize = 120;

/// Number of lines per record
pub const FIELDS_PER_RECORD: usize = 4;

/// Total number of lines in a map file
pub const LINE_COUNT: usize = RECORD_COUNT * FIELDS_PER_RECORD;

/// File extension of map files
pub const MAP_EXTENSION: &str = "map";
