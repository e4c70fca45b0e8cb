use log::trace;
use serde::Serialize;

use crate::map::{Point, Series};

use super::{ScreenPoint, Viewport};

/// A series offered to the point locator, tagged with a caller label
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a, L> {
    /// Points to search
    pub series: &'a Series,
    /// Returned with a match so the caller knows where the point came from
    pub label: L,
}

impl<'a, L> Candidate<'a, L> {
    /// Create a new candidate set
    pub fn new(series: &'a Series, label: L) -> Self {
        Self { series, label }
    }
}

/// A point found under the cursor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointMatch<L> {
    /// Label of the candidate set the point belongs to
    pub label: L,
    /// Row index of the point within its series
    pub index: usize,
    /// The matched point
    pub point: Point,
}

/// Find the point under a screen position.
///
/// The position is mapped into data space and compared against the points of
/// each candidate set in order, and within a set in row order. The first
/// point closer than [`Viewport::tolerance`] wins, even if a later point is
/// closer still. Returns `None` when nothing is within reach.
pub fn locate<L: Clone>(
    screen: ScreenPoint,
    candidates: &[Candidate<'_, L>],
    viewport: &Viewport,
) -> Option<PointMatch<L>> {
    let world = viewport.screen_to_world(screen);
    let tolerance = viewport.tolerance();
    trace!(
        "Locating ({}, {}) -> ({}, {}) within {}",
        screen.x,
        screen.y,
        world.x,
        world.y,
        tolerance
    );

    candidates.iter().find_map(|candidate| {
        candidate
            .series
            .iter()
            .position(|p| p.distance(world) < tolerance)
            .map(|index| PointMatch {
                label: candidate.label.clone(),
                index,
                point: candidate.series[index],
            })
    })
}
