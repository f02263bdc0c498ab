//! Reader and writer implementations for line geometries.

pub mod wkt;
