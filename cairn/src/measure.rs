//! Length of drawn lines as displayed to the user.

use cairn_types::cartesian::Point2d;
use cairn_types::{ClosedContour, Contour, Geom, Polygon};

/// Planar length of all lines and rings of the geometry in its coordinate units. Points have zero length.
pub fn length(geometry: &Geom<Point2d>) -> f64 {
    match geometry {
        Geom::Point(_) | Geom::MultiPoint(_) => 0.0,
        Geom::Contour(contour) => contour.length(),
        Geom::MultiContour(contours) => contours.iter().map(Contour::length).sum(),
        Geom::Polygon(polygon) => polygon.iter_contours().map(ClosedContour::length).sum(),
        Geom::MultiPolygon(polygons) => polygons
            .iter()
            .flat_map(Polygon::iter_contours)
            .map(ClosedContour::length)
            .sum(),
        Geom::Collection(geometries) => geometries.iter().map(length).sum(),
    }
}

/// Formats a length in meters for display.
///
/// Long distances are shown in kilometers with less decimals the longer they are. Lengths under one meter are not
/// worth showing, `None` is returned for them.
pub fn format_length(meters: f64) -> Option<String> {
    let text = if meters >= 100_000.0 {
        format!("{} km", (meters / 1000.0).round())
    } else if meters >= 10_000.0 {
        format!("{} km", (meters / 100.0).round() / 10.0)
    } else if meters >= 1000.0 {
        format!("{} km", (meters / 10.0).round() / 100.0)
    } else if meters >= 1.0 {
        format!("{} m", meters.round())
    } else {
        return None;
    };

    Some(text)
}
