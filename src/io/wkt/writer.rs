use std::fmt::Write;

use crate::error::Result;
use crate::geometry::{Coord, Geometry, LineString};

/// Serialize a [Geometry] to a WKT string.
///
/// The dimension tag follows the geometry's [Dimension](crate::Dimension), e.g. a referenced
/// line is written as `LINESTRING ZM (0 0 0 0, 0 1 0 69.09)`.
pub fn to_wkt(geom: &Geometry) -> Result<String> {
    let mut out = String::new();
    write_geometry(geom, &mut out)?;
    Ok(out)
}

/// Write a [Geometry] as WKT to any [std::fmt::Write].
pub fn write_geometry<W: Write>(geom: &Geometry, out: &mut W) -> std::fmt::Result {
    out.write_str(geom.geometry_type().keyword())?;
    if let Some(tag) = geom.dim().wkt_tag() {
        write!(out, " {tag}")?;
    }
    match geom {
        Geometry::LineString(ls) => {
            if ls.is_empty() {
                return out.write_str(" EMPTY");
            }
            out.write_char(' ')?;
            write_coords(ls, out)
        }
        Geometry::MultiLineString(mls) => {
            if mls.line_strings().is_empty() {
                return out.write_str(" EMPTY");
            }
            out.write_str(" (")?;
            for (i, ls) in mls.line_strings().iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                if ls.is_empty() {
                    out.write_str("EMPTY")?;
                } else {
                    write_coords(ls, out)?;
                }
            }
            out.write_char(')')
        }
    }
}

fn write_coords<W: Write>(ls: &LineString, out: &mut W) -> std::fmt::Result {
    out.write_char('(')?;
    for (i, coord) in ls.coords().iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_coord(coord, out)?;
    }
    out.write_char(')')
}

fn write_coord<W: Write>(coord: &Coord, out: &mut W) -> std::fmt::Result {
    for (i, value) in coord.ordinates().enumerate() {
        if i > 0 {
            out.write_char(' ')?;
        }
        write!(out, "{value}")?;
    }
    Ok(())
}
