//! Algorithms implemented on line geometries.

pub mod distance;
pub mod length;
pub mod measure;

pub use distance::{DistanceMetric, LengthUnit, SegmentDistance};
pub use length::PathLength;
pub use measure::{reference_coords, LineReference};
