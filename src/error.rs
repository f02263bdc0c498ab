//! Defines [`LinRefError`], representing all errors returned by this crate.

use std::borrow::Cow;
use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LinRefError {
    /// The input text could not be parsed as WKT.
    #[error("WKT error: {0}")]
    Wkt(&'static str),

    /// The input parsed as WKT, but not as a line geometry.
    #[error("Incorrect geometry type for operation: {0}")]
    IncorrectGeometryType(Cow<'static, str>),

    /// The geometry has no parts to reference.
    #[error("Empty geometry: {0}")]
    EmptyGeometry(Cow<'static, str>),

    /// A vertex could not be referenced.
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// [std::fmt::Error] raised while writing WKT.
    #[error("Failed to encode WKT")]
    Encode(#[from] std::fmt::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, LinRefError>;
