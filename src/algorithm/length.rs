//! Path length of line geometries.

use crate::algorithm::distance::SegmentDistance;
use crate::geometry::{Geometry, LineString, MultiLineString};

/// Determine the length of each part of a line geometry.
///
/// Segment distances are folded in vertex order, so for any part the result equals, bit for
/// bit, the last measure that [LineReference](crate::algorithm::LineReference) writes with the
/// same distance.
pub trait PathLength {
    type Output;

    fn path_length<D: SegmentDistance + ?Sized>(&self, distance: &D) -> Self::Output;
}

impl PathLength for LineString {
    type Output = f64;

    fn path_length<D: SegmentDistance + ?Sized>(&self, distance: &D) -> Self::Output {
        self.coords()
            .windows(2)
            .fold(0.0, |acc, w| acc + distance.segment_distance(&w[0], &w[1]))
    }
}

/// One length per part.
impl PathLength for MultiLineString {
    type Output = Vec<f64>;

    fn path_length<D: SegmentDistance + ?Sized>(&self, distance: &D) -> Self::Output {
        self.line_strings()
            .iter()
            .map(|ls| ls.path_length(distance))
            .collect()
    }
}

/// One length per part.
impl PathLength for Geometry {
    type Output = Vec<f64>;

    fn path_length<D: SegmentDistance + ?Sized>(&self, distance: &D) -> Self::Output {
        self.parts()
            .iter()
            .map(|ls| ls.path_length(distance))
            .collect()
    }
}
