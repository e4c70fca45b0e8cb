use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::map::{Point, Series};

use super::ticks::{grid_step, label_decimals, ticks, Tick};
use super::{Extent, ViewConfig};

/// Data span substituted for an axis whose values are all equal
const ZERO_RANGE_SPAN: f64 = 1.0;

/// Smallest plotting dimension in pixels; keeps the scales invertible
const MIN_PLOT_SIZE: f64 = 1.0;

/// A point on the drawing surface, in pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    /// Horizontal pixel position
    pub x: f64,
    /// Vertical pixel position
    pub y: f64,
}

impl ScreenPoint {
    /// Create a new screen point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Affine mapping between data space and the plotting area
///
/// A viewport is derived from the visible series and a [`ViewConfig`]; it is
/// never edited after construction. Recompute it whenever the data or the
/// visibility changes and hand the new value to rendering and point lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
    scale_x: f64,
    scale_y: f64,
    offset_x: f64,
    offset_y: f64,
    plot_width: f64,
    plot_height: f64,
    padding: f64,
    grid_divisions: usize,
    label_divisions: usize,
    hit_radius_px: f64,
}

/// Compute a viewport for `series` inside a `plot_width` x `plot_height`
/// area offset by `padding`, using default settings otherwise.
pub fn compute_viewport(
    series: &[&Series],
    plot_width: f64,
    plot_height: f64,
    padding: f64,
) -> Viewport {
    let config = ViewConfig::default().with_plot_area(plot_width, plot_height, padding);
    Viewport::compute(series.iter().copied(), &config)
}

impl Viewport {
    /// Compute a viewport that fits every point of `series`.
    ///
    /// Each axis gets `config.margin_fraction` of its range added on both
    /// sides. Without any points the viewport falls back to
    /// `config.default_extent`, so empty axes can still be drawn.
    pub fn compute<'a, I>(series: I, config: &ViewConfig) -> Self
    where
        I: IntoIterator<Item = &'a Series>,
    {
        let extent = data_extent(series.into_iter().flat_map(|s| s.iter()));
        let extent = match extent {
            Some(data) => {
                let (min_x, max_x) = padded(data.min_x, data.max_x, config.margin_fraction);
                let (min_y, max_y) = padded(data.min_y, data.max_y, config.margin_fraction);
                Extent::new(min_x, max_x, min_y, max_y)
            }
            None => {
                warn!("No visible points, using default extent");
                config.default_extent
            }
        };
        Self::from_extent(extent, config)
    }

    /// Build a viewport showing exactly `extent`
    pub fn from_extent(extent: Extent, config: &ViewConfig) -> Self {
        let (min_x, max_x) = non_empty(extent.min_x, extent.max_x);
        let (min_y, max_y) = non_empty(extent.min_y, extent.max_y);
        let plot_width = config.plot_width().max(MIN_PLOT_SIZE);
        let plot_height = config.plot_height().max(MIN_PLOT_SIZE);

        let viewport = Self {
            min_x,
            max_x,
            min_y,
            max_y,
            scale_x: plot_width / (max_x - min_x),
            scale_y: plot_height / (max_y - min_y),
            offset_x: config.padding,
            offset_y: config.padding,
            plot_width,
            plot_height,
            padding: config.padding,
            grid_divisions: config.grid_divisions,
            label_divisions: config.label_divisions,
            hit_radius_px: config.hit_radius_px,
        };
        debug!(
            "Viewport x=[{}, {}] y=[{}, {}] scale=({}, {})",
            viewport.min_x,
            viewport.max_x,
            viewport.min_y,
            viewport.max_y,
            viewport.scale_x,
            viewport.scale_y
        );
        viewport
    }

    /// Visible data extent
    pub fn extent(&self) -> Extent {
        Extent::new(self.min_x, self.max_x, self.min_y, self.max_y)
    }

    /// Left edge of the visible data range
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    /// Right edge of the visible data range
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Bottom edge of the visible data range
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    /// Top edge of the visible data range
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Pixels per data unit along x
    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    /// Pixels per data unit along y
    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    /// Screen x of the plotting area origin
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    /// Screen y of the plotting area origin
    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    /// Plotting area width in pixels
    pub fn plot_width(&self) -> f64 {
        self.plot_width
    }

    /// Plotting area height in pixels
    pub fn plot_height(&self) -> f64 {
        self.plot_height
    }

    /// Padding around the plotting area in pixels
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Map a data point onto the drawing surface
    pub fn world_to_screen(&self, point: Point) -> ScreenPoint {
        ScreenPoint::new(
            self.offset_x + (point.x - self.min_x) * self.scale_x,
            self.offset_y + (self.max_y - point.y) * self.scale_y,
        )
    }

    /// Map a surface position back into data space
    pub fn screen_to_world(&self, point: ScreenPoint) -> Point {
        Point::new(
            self.min_x + (point.x - self.offset_x) / self.scale_x,
            self.max_y - (point.y - self.offset_y) / self.scale_y,
        )
    }

    /// Whether a screen position lies inside the plotting area
    pub fn contains_screen(&self, point: ScreenPoint) -> bool {
        point.x >= self.offset_x
            && point.x <= self.offset_x + self.plot_width
            && point.y >= self.offset_y
            && point.y <= self.offset_y + self.plot_height
    }

    /// Hit radius converted to data units.
    ///
    /// The smaller scale is used so the radius never shrinks below the
    /// configured pixel count on either axis.
    pub fn tolerance(&self) -> f64 {
        self.hit_radius_px / self.scale_x.min(self.scale_y)
    }

    /// Gridline spacing along x
    pub fn x_grid_step(&self) -> f64 {
        grid_step(self.max_x - self.min_x, self.grid_divisions)
    }

    /// Gridline spacing along y
    pub fn y_grid_step(&self) -> f64 {
        grid_step(self.max_y - self.min_y, self.grid_divisions)
    }

    /// Vertical gridline positions
    pub fn x_grid(&self) -> Vec<Tick> {
        ticks(self.min_x, self.max_x, self.grid_divisions)
    }

    /// Horizontal gridline positions
    pub fn y_grid(&self) -> Vec<Tick> {
        ticks(self.min_y, self.max_y, self.grid_divisions)
    }

    /// Labelled ticks along x
    pub fn x_labels(&self) -> Vec<Tick> {
        ticks(self.min_x, self.max_x, self.label_divisions)
    }

    /// Labelled ticks along y
    pub fn y_labels(&self) -> Vec<Tick> {
        ticks(self.min_y, self.max_y, self.label_divisions)
    }

    /// Decimals used by the x labels
    pub fn x_label_decimals(&self) -> usize {
        label_decimals(grid_step(self.max_x - self.min_x, self.label_divisions))
    }

    /// Decimals used by the y labels
    pub fn y_label_decimals(&self) -> usize {
        label_decimals(grid_step(self.max_y - self.min_y, self.label_divisions))
    }
}

fn data_extent<'a>(points: impl Iterator<Item = &'a Point>) -> Option<Extent> {
    points.fold(None, |acc, p| {
        Some(match acc {
            None => Extent::new(p.x, p.x, p.y, p.y),
            Some(e) => Extent::new(
                e.min_x.min(p.x),
                e.max_x.max(p.x),
                e.min_y.min(p.y),
                e.max_y.max(p.y),
            ),
        })
    })
}

/// Widen a range by `fraction` of its span on each side.
///
/// A zero-width range is first widened to [`ZERO_RANGE_SPAN`], so a single
/// value `v` ends up as `v ± (0.5 + fraction)`.
fn padded(min: f64, max: f64, fraction: f64) -> (f64, f64) {
    let (min, max) = non_empty(min, max);
    let margin = (max - min) * fraction;
    (min - margin, max + margin)
}

/// Replace an empty or inverted range by one of [`ZERO_RANGE_SPAN`] around its center
fn non_empty(min: f64, max: f64) -> (f64, f64) {
    if max - min > 0.0 {
        (min, max)
    } else {
        let center = (min + max) / 2.0;
        (center - ZERO_RANGE_SPAN / 2.0, center + ZERO_RANGE_SPAN / 2.0)
    }
}
