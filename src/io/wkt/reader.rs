use std::str::FromStr;

use crate::error::{LinRefError, Result};
use crate::geometry::{Coord, Geometry, LineString, MultiLineString};

/// Parse a WKT string into a line [Geometry].
///
/// Accepts `LINESTRING` and `MULTILINESTRING` with two or three ordinates per vertex.
///
/// # Errors
///
/// - if the text is not valid WKT
/// - if it describes any other geometry type
/// - if vertices already carry a measure, mix dimensions, or contain non-finite values
pub fn read_wkt(s: &str) -> Result<Geometry> {
    let wkt = wkt::Wkt::<f64>::from_str(s).map_err(LinRefError::Wkt)?;
    let geom = match wkt {
        wkt::Wkt::LineString(ls) => Geometry::LineString(line_string_from_wkt(ls)?),
        wkt::Wkt::MultiLineString(mls) => {
            let parts = mls
                .0
                .into_iter()
                .map(line_string_from_wkt)
                .collect::<Result<Vec<_>>>()?;
            Geometry::MultiLineString(MultiLineString::try_new(parts)?)
        }
        other => {
            return Err(LinRefError::IncorrectGeometryType(
                format!("expected LINESTRING or MULTILINESTRING, got {}", type_name(&other)).into(),
            ))
        }
    };
    if geom.dim().has_m() {
        return Err(LinRefError::InvalidCoordinate(
            "input already carries M values".to_string(),
        ));
    }
    Ok(geom)
}

fn line_string_from_wkt(line_string: wkt::types::LineString<f64>) -> Result<LineString> {
    LineString::try_new(line_string.0.into_iter().map(Coord::from).collect())
}

fn type_name(wkt: &wkt::Wkt<f64>) -> &'static str {
    match wkt {
        wkt::Wkt::Point(_) => "POINT",
        wkt::Wkt::Polygon(_) => "POLYGON",
        wkt::Wkt::MultiPoint(_) => "MULTIPOINT",
        wkt::Wkt::MultiPolygon(_) => "MULTIPOLYGON",
        wkt::Wkt::GeometryCollection(_) => "GEOMETRYCOLLECTION",
        _ => "an unsupported geometry",
    }
}
