use crate::datatypes::Dimension;
use crate::error::{LinRefError, Result};
use crate::geometry::LineString;

/// An ordered collection of [LineString] parts sharing one [Dimension].
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    line_strings: Vec<LineString>,
    dim: Dimension,
}

impl MultiLineString {
    /// Construct a new MultiLineString without checking that each part matches `dim`.
    pub fn new(line_strings: Vec<LineString>, dim: Dimension) -> Self {
        Self { line_strings, dim }
    }

    /// Construct a new MultiLineString, inferring the dimension from the parts.
    ///
    /// Empty parts carry no dimension of their own and take on the inferred one.
    pub fn try_new(mut line_strings: Vec<LineString>) -> Result<Self> {
        let dim = line_strings
            .iter()
            .find(|ls| !ls.is_empty())
            .map_or(Dimension::XY, LineString::dim);
        for (i, ls) in line_strings.iter().enumerate() {
            if !ls.is_empty() && ls.dim() != dim {
                return Err(LinRefError::InvalidCoordinate(format!(
                    "part {i} has dimension {}, expected {dim}",
                    ls.dim()
                )));
            }
        }
        line_strings
            .iter_mut()
            .filter(|ls| ls.is_empty())
            .for_each(|ls| ls.set_dim(dim));
        Ok(Self { line_strings, dim })
    }

    /// Access the parts of this geometry.
    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }

    /// Mutable access to the parts of this geometry.
    pub fn line_strings_mut(&mut self) -> &mut [LineString] {
        &mut self.line_strings
    }

    /// Consume this geometry, returning its parts.
    pub fn into_inner(self) -> Vec<LineString> {
        self.line_strings
    }

    /// The coordinate dimension of this geometry.
    pub fn dim(&self) -> Dimension {
        self.dim
    }

    pub(crate) fn set_dim(&mut self, dim: Dimension) {
        self.dim = dim;
    }

    /// Number of parts.
    pub fn num_line_strings(&self) -> usize {
        self.line_strings.len()
    }
}
