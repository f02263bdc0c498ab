//! Configuration for computing measures.

use serde::{Deserialize, Serialize};

use crate::algorithm::distance::{DistanceMetric, LengthUnit, SegmentDistance};
use crate::geometry::Coord;

/// Options controlling how measures are computed.
///
/// The default measures great-circle (haversine) distance in miles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasureOptions {
    /// Formula used for each segment.
    pub metric: DistanceMetric,

    /// Unit of the output measures. Ignored by [DistanceMetric::Euclidean].
    pub unit: LengthUnit,
}

impl MeasureOptions {
    pub fn new(metric: DistanceMetric, unit: LengthUnit) -> Self {
        Self { metric, unit }
    }

    pub fn with_metric(self, metric: DistanceMetric) -> Self {
        Self { metric, ..self }
    }

    pub fn with_unit(self, unit: LengthUnit) -> Self {
        Self { unit, ..self }
    }
}

impl SegmentDistance for MeasureOptions {
    fn segment_distance(&self, from: &Coord, to: &Coord) -> f64 {
        let distance = self.metric.distance(from, to);
        if self.metric.is_geographic() {
            self.unit.from_meters(distance)
        } else {
            distance
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_to_haversine_miles() {
        let options = MeasureOptions::default();
        assert_eq!(options.metric, DistanceMetric::Haversine);
        assert_eq!(options.unit, LengthUnit::Miles);
    }

    #[test]
    fn deserialize_partial() {
        let options: MeasureOptions = serde_json::from_str(r#"{"unit": "kilometers"}"#).unwrap();
        assert_eq!(
            options,
            MeasureOptions::default().with_unit(LengthUnit::Kilometers)
        );

        let options: MeasureOptions =
            serde_json::from_str(r#"{"metric": "geodesic", "unit": "nautical_miles"}"#).unwrap();
        assert_eq!(
            options,
            MeasureOptions::new(DistanceMetric::Geodesic, LengthUnit::NauticalMiles)
        );
    }

    #[test]
    fn serialize_snake_case() {
        let options = MeasureOptions::default().with_metric(DistanceMetric::Euclidean);
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"metric":"euclidean","unit":"miles"}"#);
    }

    #[test]
    fn unit_applies_to_geographic_only() {
        let from: Coord = (0., 0.).into();
        let to: Coord = (0., 1.).into();

        let miles = MeasureOptions::default().segment_distance(&from, &to);
        let meters = MeasureOptions::default()
            .with_unit(LengthUnit::Meters)
            .segment_distance(&from, &to);
        assert_eq!(miles, meters / 1609.344);

        let planar = MeasureOptions::default()
            .with_metric(DistanceMetric::Euclidean)
            .segment_distance(&from, &to);
        assert_eq!(planar, 1.0);
    }
}
