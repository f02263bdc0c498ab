//! Read and write line geometries as Well-Known Text.

pub use reader::read_wkt;
pub use writer::{to_wkt, write_geometry};

mod reader;
mod writer;
