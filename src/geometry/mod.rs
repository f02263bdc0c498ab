//! Line geometries with an explicit coordinate dimension.

pub use coord::Coord;
pub use linestring::LineString;
pub use multilinestring::MultiLineString;
pub use scalar::Geometry;

mod coord;
mod linestring;
mod multilinestring;
mod scalar;
