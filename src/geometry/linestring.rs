use crate::datatypes::Dimension;
use crate::error::{LinRefError, Result};
use crate::geometry::Coord;

/// An ordered sequence of vertices sharing one [Dimension].
///
/// Within a multi-part geometry this is one "part".
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    coords: Vec<Coord>,
    dim: Dimension,
}

impl LineString {
    /// Construct a new LineString without checking that each coordinate matches `dim`.
    pub fn new(coords: Vec<Coord>, dim: Dimension) -> Self {
        Self { coords, dim }
    }

    /// Construct a new LineString, inferring the dimension from the coordinates.
    ///
    /// # Errors
    ///
    /// - if coordinates do not all carry the same ordinates
    /// - if any ordinate is not finite
    ///
    /// An empty coordinate list yields an empty [Dimension::XY] line.
    pub fn try_new(coords: Vec<Coord>) -> Result<Self> {
        let dim = coords.first().map_or(Dimension::XY, Coord::dim);
        for (i, coord) in coords.iter().enumerate() {
            if coord.dim() != dim {
                return Err(LinRefError::InvalidCoordinate(format!(
                    "vertex {i} has dimension {}, expected {dim}",
                    coord.dim()
                )));
            }
            if !coord.is_finite() {
                return Err(LinRefError::InvalidCoordinate(format!(
                    "vertex {i} has a non-finite ordinate: {coord:?}"
                )));
            }
        }
        Ok(Self { coords, dim })
    }

    /// Access the vertices of this line.
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Mutable access to the vertices of this line.
    pub fn coords_mut(&mut self) -> &mut [Coord] {
        &mut self.coords
    }

    /// The coordinate dimension of this line.
    pub fn dim(&self) -> Dimension {
        self.dim
    }

    pub(crate) fn set_dim(&mut self, dim: Dimension) {
        self.dim = dim;
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Whether this line has no vertices.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The measure of each vertex, if present.
    pub fn measures(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.coords.iter().map(|c| c.m)
    }
}
