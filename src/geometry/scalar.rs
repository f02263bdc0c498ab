use std::fmt::Display;

use crate::datatypes::{Dimension, GeometryType};
use crate::error::{LinRefError, Result};
use crate::geometry::{LineString, MultiLineString};

/// A line geometry decoded from WKT.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    LineString(LineString),
    MultiLineString(MultiLineString),
}

impl Geometry {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
        }
    }

    pub fn dim(&self) -> Dimension {
        match self {
            Geometry::LineString(ls) => ls.dim(),
            Geometry::MultiLineString(mls) => mls.dim(),
        }
    }

    /// Borrow the parts of this geometry.
    ///
    /// A LineString is its own single part.
    pub fn parts(&self) -> &[LineString] {
        match self {
            Geometry::LineString(ls) => std::slice::from_ref(ls),
            Geometry::MultiLineString(mls) => mls.line_strings(),
        }
    }

    /// Split this geometry into its parts, preserving part and vertex order.
    ///
    /// A LineString yields exactly one part. A MultiLineString yields one part per member line.
    pub fn into_parts(self) -> Vec<LineString> {
        match self {
            Geometry::LineString(ls) => vec![ls],
            Geometry::MultiLineString(mls) => mls.into_inner(),
        }
    }

    /// Recombine parts into one geometry.
    ///
    /// One part becomes a LineString, more than one a MultiLineString.
    ///
    /// # Errors
    ///
    /// - if `parts` is empty
    /// - if the parts do not share a dimension
    pub fn from_parts(mut parts: Vec<LineString>) -> Result<Self> {
        match parts.len() {
            0 => Err(LinRefError::EmptyGeometry(
                "a line geometry needs at least one part".into(),
            )),
            1 => Ok(Geometry::LineString(parts.remove(0))),
            _ => {
                let dim = parts[0].dim();
                if let Some((i, ls)) = parts.iter().enumerate().find(|(_, ls)| ls.dim() != dim) {
                    return Err(LinRefError::InvalidCoordinate(format!(
                        "part {i} has dimension {}, expected {dim}",
                        ls.dim()
                    )));
                }
                Ok(Geometry::MultiLineString(MultiLineString::new(parts, dim)))
            }
        }
    }

    /// Total number of vertices across all parts.
    pub fn num_coords(&self) -> usize {
        self.parts().iter().map(LineString::len).sum()
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Geometry::LineString(value)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(value: MultiLineString) -> Self {
        Geometry::MultiLineString(value)
    }
}

impl Display for Geometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::io::wkt::write_geometry(self, f)
    }
}
