use std::fmt;
use std::ops::Index;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{parse, MapError};

/// A single map point: manifold pressure on x, injection time on y
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Pressure reading
    pub x: f64,
    /// Timing value
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Which of the two interleaved columns of a map file a series comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    /// Fields 1-2 of every record (gasoline)
    Primary,
    /// Fields 3-4 of every record (gas)
    Secondary,
}

impl SeriesKind {
    /// Human-readable fuel name of the column
    pub fn fuel_name(&self) -> &'static str {
        match self {
            SeriesKind::Primary => "gasoline",
            SeriesKind::Secondary => "gas",
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fuel_name())
    }
}

/// Ordered sequence of points; index `i` is operating-condition row `i`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series(Vec<Point>);

impl Series {
    /// Create a series from points in row order
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the series has no points
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Point at a row index
    pub fn get(&self, index: usize) -> Option<Point> {
        self.0.get(index).copied()
    }

    /// Iterate over the points in row order
    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.0.iter()
    }

    /// Points as a slice
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Bounds and count of the series
    pub fn stats(&self) -> SeriesStats {
        SeriesStats::from_points(&self.0)
    }
}

impl From<Vec<Point>> for Series {
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}

impl FromIterator<Point> for Series {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Index<usize> for Series {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Summary bounds of a series
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    /// Smallest x value
    pub min_x: f64,
    /// Largest x value
    pub max_x: f64,
    /// Smallest y value
    pub min_y: f64,
    /// Largest y value
    pub max_y: f64,
    /// Number of points
    pub count: usize,
}

impl SeriesStats {
    /// Compute statistics over points; all bounds are zero when empty
    pub fn from_points(points: &[Point]) -> Self {
        let Some(first) = points.first() else {
            return Self::default();
        };
        points.iter().skip(1).fold(
            Self {
                min_x: first.x,
                max_x: first.x,
                min_y: first.y,
                max_y: first.y,
                count: points.len(),
            },
            |acc, p| Self {
                min_x: acc.min_x.min(p.x),
                max_x: acc.max_x.max(p.x),
                min_y: acc.min_y.min(p.y),
                max_y: acc.max_y.max(p.y),
                count: acc.count,
            },
        )
    }
}

/// The pair of series parsed from one map file
///
/// Values are immutable once built; [`parse`] guarantees both series have
/// exactly [`RECORD_COUNT`](super::RECORD_COUNT) points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FuelMap {
    primary: Series,
    secondary: Series,
}

impl FuelMap {
    /// Build a map from two series
    pub fn new(primary: Series, secondary: Series) -> Self {
        Self { primary, secondary }
    }

    /// Parse a map file from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MapError> {
        let text = std::fs::read_to_string(path)?;
        parse(&text)
    }

    /// The gasoline series (fields 1-2 of each record)
    pub fn primary(&self) -> &Series {
        &self.primary
    }

    /// The gas series (fields 3-4 of each record)
    pub fn secondary(&self) -> &Series {
        &self.secondary
    }

    /// Series for the given column
    pub fn series(&self, kind: SeriesKind) -> &Series {
        match kind {
            SeriesKind::Primary => &self.primary,
            SeriesKind::Secondary => &self.secondary,
        }
    }

    /// Consume the map and return `(primary, secondary)`
    pub fn into_parts(self) -> (Series, Series) {
        (self.primary, self.secondary)
    }
}

impl FromStr for FuelMap {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
