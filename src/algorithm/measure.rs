//! Linear referencing: cumulative distance along a line, stored as the M ordinate.

use crate::algorithm::distance::SegmentDistance;
use crate::datatypes::Dimension;
use crate::geometry::{Coord, Geometry, LineString, MultiLineString};

/// Write the cumulative distance from the first vertex into each vertex's measure.
///
/// The first vertex gets 0. Every following vertex gets the measure of the vertex before it
/// plus the distance between the two. Sums are plain floating-point additions, so the last
/// measure equals the same distances folded in order. An empty slice is left untouched, and a
/// single vertex gets 0 without any distance being computed.
pub fn reference_coords<D: SegmentDistance + ?Sized>(coords: &mut [Coord], distance: &D) {
    let mut previous: Option<(Coord, f64)> = None;
    for coord in coords.iter_mut() {
        let measure = match previous {
            Some((prev, prev_measure)) => prev_measure + distance.segment_distance(&prev, coord),
            None => 0.0,
        };
        coord.m = Some(measure);
        previous = Some((*coord, measure));
    }
}

/// Add linear references (M values) to a line geometry.
///
/// Every vertex of the output carries x, y, z and m. Vertices without elevation get `z = 0`.
/// x, y and existing z are never modified. Each part of a multi-part geometry starts again at
/// 0; measures do not carry over between parts.
///
/// # Examples
///
/// ```
/// use linref::algorithm::LineReference;
/// use linref::geometry::{Coord, LineString};
/// use linref::{Dimension, MeasureOptions};
///
/// let line = LineString::new(
///     vec![(0., 0., 10.).into(), (0., 1., 12.).into()],
///     Dimension::XYZ,
/// );
/// let referenced = line.line_reference(&MeasureOptions::default());
///
/// assert_eq!(referenced.dim(), Dimension::XYZM);
/// assert_eq!(referenced.coords()[0], Coord::new_xyzm(0., 0., 10., 0.));
/// assert_eq!(referenced.coords()[1].m.unwrap().round(), 69.);
/// ```
pub trait LineReference {
    /// Add measures in place.
    fn line_reference_mut<D: SegmentDistance + ?Sized>(&mut self, distance: &D);

    /// Return a copy of this geometry with measures added.
    fn line_reference<D: SegmentDistance + ?Sized>(&self, distance: &D) -> Self
    where
        Self: Clone,
    {
        let mut out = self.clone();
        out.line_reference_mut(distance);
        out
    }
}

impl LineReference for LineString {
    fn line_reference_mut<D: SegmentDistance + ?Sized>(&mut self, distance: &D) {
        reference_coords(self.coords_mut(), distance);
        for coord in self.coords_mut() {
            coord.z.get_or_insert(0.0);
        }
        self.set_dim(Dimension::XYZM);
    }
}

impl LineReference for MultiLineString {
    fn line_reference_mut<D: SegmentDistance + ?Sized>(&mut self, distance: &D) {
        self.line_strings_mut()
            .iter_mut()
            .for_each(|ls| ls.line_reference_mut(distance));
        self.set_dim(Dimension::XYZM);
    }
}

impl LineReference for Geometry {
    fn line_reference_mut<D: SegmentDistance + ?Sized>(&mut self, distance: &D) {
        match self {
            Geometry::LineString(ls) => ls.line_reference_mut(distance),
            Geometry::MultiLineString(mls) => mls.line_reference_mut(distance),
        }
    }
}
