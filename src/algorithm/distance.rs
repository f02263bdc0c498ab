//! Segment distance between consecutive vertices.

use geo::{EuclideanDistance, GeodesicDistance, HaversineDistance};
use serde::{Deserialize, Serialize};

use crate::geometry::Coord;

const METERS_PER_KILOMETER: f64 = 1000.0;
const METERS_PER_MILE: f64 = 1609.344;
const METERS_PER_FOOT: f64 = 0.3048;
const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;

/// Distance between two consecutive vertices of a line.
///
/// Implementations must be symmetric and non-negative, and return zero only for coincident
/// points. Only the horizontal position (x, y) of each vertex is considered.
pub trait SegmentDistance {
    fn segment_distance(&self, from: &Coord, to: &Coord) -> f64;
}

impl<D: SegmentDistance + ?Sized> SegmentDistance for &D {
    fn segment_distance(&self, from: &Coord, to: &Coord) -> f64 {
        (**self).segment_distance(from, to)
    }
}

/// Formula used to measure a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Great-circle distance using the [haversine formula] on a sphere with the mean earth
    /// radius of 6371.0088 km. Coordinates are longitude/latitude in degrees.
    ///
    /// [haversine formula]: https://en.wikipedia.org/wiki/Haversine_formula
    #[default]
    Haversine,

    /// Shortest distance on the WGS84 ellipsoid (Karney 2013).
    Geodesic,

    /// Planar distance in coordinate units. [LengthUnit] is not applied.
    Euclidean,
}

impl DistanceMetric {
    /// Whether this metric returns meters that a [LengthUnit] may convert.
    pub fn is_geographic(&self) -> bool {
        !matches!(self, DistanceMetric::Euclidean)
    }

    /// Distance between the horizontal positions of two vertices.
    ///
    /// # Units
    ///
    /// - return value: meters for geographic metrics, coordinate units otherwise
    pub fn distance(&self, from: &Coord, to: &Coord) -> f64 {
        let (from, to) = (from.to_point(), to.to_point());
        match self {
            DistanceMetric::Haversine => from.haversine_distance(&to),
            DistanceMetric::Geodesic => from.geodesic_distance(&to),
            DistanceMetric::Euclidean => from.euclidean_distance(&to),
        }
    }
}

/// Unit of the measures written to each vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    Meters,
    Kilometers,
    #[default]
    Miles,
    Feet,
    NauticalMiles,
}

impl LengthUnit {
    /// Convert a length in meters to this unit.
    pub fn from_meters(&self, meters: f64) -> f64 {
        match self {
            LengthUnit::Meters => meters,
            LengthUnit::Kilometers => meters / METERS_PER_KILOMETER,
            LengthUnit::Miles => meters / METERS_PER_MILE,
            LengthUnit::Feet => meters / METERS_PER_FOOT,
            LengthUnit::NauticalMiles => meters / METERS_PER_NAUTICAL_MILE,
        }
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;

    fn nyc() -> Coord {
        (-74.006, 40.7128).into()
    }

    fn london() -> Coord {
        (-0.1278, 51.5074).into()
    }

    #[test]
    fn haversine_meters() {
        let d = DistanceMetric::Haversine.distance(&nyc(), &london());
        assert_eq!(d.round(), 5_570_230.);
    }

    #[test]
    fn geodesic_close_to_haversine() {
        let haversine = DistanceMetric::Haversine.distance(&nyc(), &london());
        let geodesic = DistanceMetric::Geodesic.distance(&nyc(), &london());
        assert_relative_eq!(haversine, geodesic, max_relative = 0.005);
    }

    #[test]
    fn euclidean_coordinate_units() {
        let d = DistanceMetric::Euclidean.distance(&(0., 0.).into(), &(3., 4.).into());
        assert_eq!(d, 5.0);
        assert!(!DistanceMetric::Euclidean.is_geographic());
    }

    #[test]
    fn symmetric_and_zero_for_coincident() {
        for metric in [
            DistanceMetric::Haversine,
            DistanceMetric::Geodesic,
            DistanceMetric::Euclidean,
        ] {
            let there = metric.distance(&nyc(), &london());
            let back = metric.distance(&london(), &nyc());
            assert_relative_eq!(there, back, max_relative = 1e-12);
            assert!(there > 0.);
            assert_eq!(metric.distance(&nyc(), &nyc()), 0.);
        }
    }

    #[test]
    fn ignores_elevation() {
        let low: Coord = (0., 0., 0.).into();
        let high: Coord = (0., 0., 8848.).into();
        assert_eq!(DistanceMetric::Haversine.distance(&low, &high), 0.);
    }

    #[test]
    fn unit_conversion() {
        assert_eq!(LengthUnit::Meters.from_meters(1609.344), 1609.344);
        assert_eq!(LengthUnit::Miles.from_meters(1609.344), 1.0);
        assert_eq!(LengthUnit::Kilometers.from_meters(2500.), 2.5);
        assert_relative_eq!(LengthUnit::Feet.from_meters(0.9144), 3.0);
        assert_eq!(LengthUnit::NauticalMiles.from_meters(1852.), 1.0);
    }
}
