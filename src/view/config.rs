use serde::{Deserialize, Serialize};

/// Axis-aligned data-space rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    /// Left edge
    pub min_x: f64,
    /// Right edge
    pub max_x: f64,
    /// Bottom edge
    pub min_y: f64,
    /// Top edge
    pub max_y: f64,
}

impl Extent {
    /// Create a new extent
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Horizontal span
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical span
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::new(0.0, 1000.0, 0.0, 1000.0)
    }
}

/// Settings for computing a [`Viewport`](super::Viewport)
///
/// This is a plain value: every `with_*` method returns a modified copy, so a
/// configuration can be shared freely between threads and recomputations.
///
/// All fields are optional when deserializing; missing ones take the
/// defaults below.
///
/// ```toml
/// width = 1024
/// height = 768
/// padding = 40
/// margin_fraction = 0.05
/// grid_divisions = 8
/// label_divisions = 6
/// hit_radius_px = 10
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Drawing surface width in pixels
    pub width: f64,
    /// Drawing surface height in pixels
    pub height: f64,
    /// Blank border around the plotting area, in pixels
    pub padding: f64,
    /// Fraction of the data range added on each side of each axis
    pub margin_fraction: f64,
    /// Target number of gridline divisions per axis
    pub grid_divisions: usize,
    /// Target number of labelled ticks per axis
    pub label_divisions: usize,
    /// Screen radius within which a point counts as hit
    pub hit_radius_px: f64,
    /// Extent used when there is no data to show
    pub default_extent: Extent,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: 40.0,
            margin_fraction: 0.05,
            grid_divisions: super::GRID_DIVISIONS,
            label_divisions: super::LABEL_DIVISIONS,
            hit_radius_px: 10.0,
            default_extent: Extent::default(),
        }
    }
}

impl ViewConfig {
    /// Width available for plotting (surface minus padding on both sides)
    pub fn plot_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    /// Height available for plotting (surface minus padding on both sides)
    pub fn plot_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }

    /// Copy with a different surface size
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Copy with a different padding
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Copy whose plotting area is exactly `plot_width` x `plot_height`
    pub fn with_plot_area(self, plot_width: f64, plot_height: f64, padding: f64) -> Self {
        self.with_padding(padding)
            .with_size(plot_width + 2.0 * padding, plot_height + 2.0 * padding)
    }

    /// Copy with a different margin fraction
    pub fn with_margin_fraction(mut self, margin_fraction: f64) -> Self {
        self.margin_fraction = margin_fraction;
        self
    }

    /// Copy with a different hit radius
    pub fn with_hit_radius(mut self, hit_radius_px: f64) -> Self {
        self.hit_radius_px = hit_radius_px;
        self
    }

    /// Copy with a different fallback extent
    pub fn with_default_extent(mut self, extent: Extent) -> Self {
        self.default_extent = extent;
        self
    }
}
