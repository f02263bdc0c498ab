//! Geometry type and dimension tags.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The kind of line geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryType {
    /// A single line.
    LineString,

    /// Zero or more lines.
    MultiLineString,
}

impl GeometryType {
    /// The WKT keyword for this geometry type, without a dimension tag.
    pub fn keyword(&self) -> &'static str {
        match self {
            GeometryType::LineString => "LINESTRING",
            GeometryType::MultiLineString => "MULTILINESTRING",
        }
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The coordinate dimension of a geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Two-dimensional.
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Dimension {
    /// Infer the dimension from which optional ordinates are present.
    pub fn from_flags(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Dimension::XY,
            (true, false) => Dimension::XYZ,
            (false, true) => Dimension::XYM,
            (true, true) => Dimension::XYZM,
        }
    }

    /// Whether coordinates carry a measure ordinate.
    pub fn has_m(&self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }

    /// The WKT dimension tag that follows the geometry keyword.
    ///
    /// Two-dimensional geometries have no tag.
    pub fn wkt_tag(&self) -> Option<&'static str> {
        match self {
            Dimension::XY => None,
            Dimension::XYZ => Some("Z"),
            Dimension::XYM => Some("M"),
            Dimension::XYZM => Some("ZM"),
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::XY => write!(f, "XY"),
            Dimension::XYZ => write!(f, "XYZ"),
            Dimension::XYM => write!(f, "XYM"),
            Dimension::XYZM => write!(f, "XYZM"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_flags() {
        assert_eq!(Dimension::from_flags(false, false), Dimension::XY);
        assert_eq!(Dimension::from_flags(true, false), Dimension::XYZ);
        assert_eq!(Dimension::from_flags(false, true), Dimension::XYM);
        assert_eq!(Dimension::from_flags(true, true), Dimension::XYZM);
    }

    #[test]
    fn wkt_tags() {
        assert_eq!(Dimension::XY.wkt_tag(), None);
        assert_eq!(Dimension::XYZ.wkt_tag(), Some("Z"));
        assert_eq!(Dimension::XYM.wkt_tag(), Some("M"));
        assert_eq!(Dimension::XYZM.wkt_tag(), Some("ZM"));
        assert_eq!(GeometryType::MultiLineString.to_string(), "MULTILINESTRING");
    }
}
