//! # View Module
//!
//! Plotting geometry for map series: the data extent, the affine mapping
//! between data space and a bounded drawing surface, gridline and label
//! placement, and hit testing of screen positions against points.
//!
//! Nothing here draws. A rendering layer takes a [`Viewport`] and the series
//! and issues its own drawing calls.
//!
//! ## Example
//!
//! ```rust
//! use fuelmap::map::{Point, Series};
//! use fuelmap::view::{locate, Candidate, ScreenPoint, ViewConfig, Viewport};
//!
//! let gasoline = Series::new(vec![Point::new(100.0, 5.2), Point::new(400.0, 9.8)]);
//! let viewport = Viewport::compute([&gasoline], &ViewConfig::default());
//!
//! let screen = viewport.world_to_screen(Point::new(100.0, 5.2));
//! let hit = locate(screen, &[Candidate::new(&gasoline, "gasoline")], &viewport);
//! assert_eq!(hit.map(|m| m.index), Some(0));
//!
//! let far = ScreenPoint::new(-500.0, -500.0);
//! assert!(locate(far, &[Candidate::new(&gasoline, "gasoline")], &viewport).is_none());
//! ```

mod config;
mod locate;
mod ticks;
mod viewport;


pub use config::{Extent, ViewConfig};
pub use locate::{locate, Candidate, PointMatch};
pub use ticks::{format_label, grid_step, label_decimals, ticks, Tick};
pub use viewport::{compute_viewport, ScreenPoint, Viewport};

/// Gridline divisions per axis used by default
pub const GRID_DIVISIONS: usize = 8;

/// Label divisions per axis used by default
pub const LABEL_DIVISIONS: usize = 6;
