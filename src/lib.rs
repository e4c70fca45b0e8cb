//! # fuelmap - Injection Map Codec and Plot Geometry
//!
//! `fuelmap` reads, validates and recombines the 480-line map files used by
//! dual-fuel (gasoline/gas) injection controllers, and computes the geometry
//! needed to plot them: data extent, screen transforms, gridlines, axis
//! labels, and point lookup under the cursor.
//!
//! ## Key Features
//!
//! - **Strict Parsing**: exactly 120 four-line records, comma decimals, with
//!   the failing line range reported on error.
//!
//! - **Cross-Splicing**: build a new map from the gasoline series of one
//!   file and the gas series of another.
//!
//! - **Pure Geometry**: viewports are plain values computed from data and an
//!   immutable [`ViewConfig`](view::ViewConfig); no drawing surface needed.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fuelmap::map::{merge, merged_file_name, write_map, MapFile};
//! use fuelmap::view::{locate, ScreenPoint, ViewConfig, Viewport};
//!
//! let summer = MapFile::load("summer.map")?;
//! let winter = MapFile::load("winter.map")?;
//!
//! // Gasoline from summer, gas from winter
//! let merged = merge(&summer.map, &winter.map)?;
//! write_map(merged_file_name(&winter.name), &merged)?;
//!
//! // Plot geometry for everything that is visible
//! let files = vec![summer, winter];
//! let series = files.iter().flat_map(|f| f.visible_series().map(|(_, s)| s));
//! let viewport = Viewport::compute(series, &ViewConfig::default());
//!
//! let candidates = fuelmap::map::visible_candidates(&files);
//! if let Some(hit) = locate(ScreenPoint::new(300.0, 200.0), &candidates, &viewport) {
//!     println!("{} row {}: {:?}", files[hit.label.file_index].name, hit.index, hit.point);
//! }
//! # Ok::<(), fuelmap::map::MapError>(())
//! ```
//!
//! ## File Format
//!
//! | Line | Content |
//! |------|---------|
//! | 4k+1 | gasoline manifold pressure of row k |
//! | 4k+2 | gasoline injection time of row k |
//! | 4k+3 | gas manifold pressure of row k |
//! | 4k+4 | gas injection time of row k |
//!
//! Values use `,` as the decimal separator; `\n` and `\r\n` line endings are
//! both accepted.
//!
//! ## Architecture
//!
//! - [`numeric`]: comma-decimal codec
//! - [`map`]: data model, parser, merger, loaded files
//! - [`view`]: viewport, gridlines and labels, point locator
//! - [`validator`]: report-style file validation

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod map;
pub mod numeric;
pub mod validator;
pub mod view;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::map::{
        merge, parse, FuelMap, LayoutError, MapError, MapFile, Point, Series, SeriesKind,
        SeriesRef, Visibility,
    };
    pub use crate::numeric::{format_decimal, parse_decimal, NumericParseError};
    pub use crate::validator::{validate_map_file, validate_map_text, ValidationReport};
    pub use crate::view::{
        compute_viewport, locate, Candidate, PointMatch, ScreenPoint, Tick, ViewConfig, Viewport,
    };
}
