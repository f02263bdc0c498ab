//! Linear referencing for Well-Known Text line geometries.
//!
//! [add_line_references] takes a `LINESTRING` or `MULTILINESTRING` in WKT and returns the same
//! geometry tagged `ZM`, where the 4th ordinate of every vertex is its distance along the line
//! from the start of its part, in miles.
//!
//! ```
//! let referenced = linref::add_line_references("LINESTRING Z (0 0 0, 0 1 0)").unwrap();
//! assert!(referenced.starts_with("LINESTRING ZM (0 0 0 0, 0 1 0 69.09"));
//! ```

#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use datatypes::{Dimension, GeometryType};
pub use error::{LinRefError, Result};
pub use geometry::Geometry;
pub use options::MeasureOptions;

pub mod algorithm;
pub mod datatypes;
pub mod error;
pub mod geometry;
pub mod io;
pub mod options;
#[cfg(test)]
pub(crate) mod test;

use crate::algorithm::{LineReference, PathLength};
use crate::io::wkt::{read_wkt, to_wkt};

/// Add linear references, measured as haversine distance in miles, to a WKT line geometry.
///
/// See [add_line_references_with_options].
pub fn add_line_references(wkt: &str) -> Result<String> {
    add_line_references_with_options(wkt, &MeasureOptions::default())
}

/// Add linear references to a WKT line geometry.
///
/// The input is split into parts (a `LINESTRING` is one part), each part is referenced on its
/// own starting from 0, and the parts are written back as `LINESTRING ZM` when there is one and
/// `MULTILINESTRING ZM` otherwise.
///
/// # Errors
///
/// - [LinRefError::Wkt] if the text is not valid WKT
/// - [LinRefError::IncorrectGeometryType] if it is not a line geometry
/// - [LinRefError::EmptyGeometry] if it has no parts
/// - [LinRefError::InvalidCoordinate] if a vertex cannot be referenced
pub fn add_line_references_with_options(wkt: &str, options: &MeasureOptions) -> Result<String> {
    let geometry = read_wkt(wkt)?;
    log::debug!(
        "referencing {} {} with {} vertices using {:?}",
        geometry.geometry_type(),
        geometry.dim(),
        geometry.num_coords(),
        options
    );

    let mut parts = geometry.into_parts();
    for (i, part) in parts.iter_mut().enumerate() {
        part.line_reference_mut(options);
        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "part {i}: {} vertices, length {}",
                part.len(),
                part.path_length(options)
            );
        }
    }

    let referenced = Geometry::from_parts(parts)?;
    log::debug!(
        "referenced geometry has {} part(s)",
        referenced.parts().len()
    );
    to_wkt(&referenced)
}
