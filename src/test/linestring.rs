use crate::datatypes::Dimension;
use crate::geometry::{Coord, LineString};

pub(crate) fn ls0() -> LineString {
    LineString::new(
        vec![(0., 0., 0.).into(), (0., 1., 0.).into()],
        Dimension::XYZ,
    )
}

pub(crate) fn ls1() -> LineString {
    LineString::new(
        vec![(1., 0., 0.).into(), (1., 2., 0.).into()],
        Dimension::XYZ,
    )
}

/// A walk through San Francisco with elevation in meters.
pub(crate) fn ls_track() -> LineString {
    LineString::new(
        vec![
            (-122.4194, 37.7749, 16.).into(),
            (-122.4183, 37.7765, 18.5).into(),
            (-122.4183, 37.7765, 18.5).into(),
            (-122.4167, 37.7781, 21.).into(),
            (-122.4148, 37.7802, 24.25).into(),
        ],
        Dimension::XYZ,
    )
}

pub(crate) fn ls_xy() -> LineString {
    LineString::new(vec![(0., 0.).into(), (3., 4.).into()], Dimension::XY)
}

pub(crate) fn ls_single() -> LineString {
    LineString::new(vec![Coord::from((5., 5., 1.))], Dimension::XYZ)
}
