use geo::Point;

use crate::datatypes::Dimension;

/// A single vertex: longitude/latitude plus optional elevation and measure.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coord {
    /// Longitude, or planar x.
    pub x: f64,
    /// Latitude, or planar y.
    pub y: f64,
    /// Elevation.
    pub z: Option<f64>,
    /// Linear measure.
    pub m: Option<f64>,
}

impl Coord {
    /// Construct a coordinate with all four ordinates.
    pub fn new_xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: Some(m),
        }
    }

    /// The dimension implied by which ordinates are present.
    pub fn dim(&self) -> Dimension {
        Dimension::from_flags(self.z.is_some(), self.m.is_some())
    }

    /// The horizontal position as a [geo::Point], dropping z and m.
    pub fn to_point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether every present ordinate is a finite number.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.z.map_or(true, f64::is_finite)
            && self.m.map_or(true, f64::is_finite)
    }

    /// Iterate over the present ordinates in x, y, z, m order.
    pub fn ordinates(&self) -> impl Iterator<Item = f64> {
        [Some(self.x), Some(self.y), self.z, self.m]
            .into_iter()
            .flatten()
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }
}

impl From<(f64, f64, f64)> for Coord {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: None,
        }
    }
}

impl From<wkt::types::Coord<f64>> for Coord {
    fn from(value: wkt::types::Coord<f64>) -> Self {
        Self {
            x: value.x,
            y: value.y,
            z: value.z,
            m: value.m,
        }
    }
}
