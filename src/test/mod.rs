pub(crate) mod linestring;

/// A GPS track with elevation, as exported from a recording device.
pub(crate) const LINESTRING_WKT: &str = include_str!("../../fixtures/linestring.wkt.txt");

/// [LINESTRING_WKT] with mile measures appended.
pub(crate) const LINESTRING_REFERENCED_WKT: &str =
    include_str!("../../fixtures/linestring.referenced.wkt.txt");
