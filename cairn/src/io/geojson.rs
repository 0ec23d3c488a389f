//! GeoJSON text is the persisted form of an editing session.
//!
//! Input may be a `FeatureCollection`, a single `Feature` or a bare geometry. Output is always a `FeatureCollection`
//! with one feature per point, line and polygon, and `null` properties.

use crate::error::CairnError;
use crate::reconcile::Reconciliation;
use cairn_types::cartesian::Point2d;
use cairn_types::Geom;
use geojson::{Feature, FeatureCollection, GeoJson, Position, Value};

/// Number of decimals in the written coordinates when nothing else is configured. It is about 1 m for degrees.
pub const DEFAULT_PRECISION: u32 = 5;

/// Largest number of decimals that is applied. An `f64` does not hold more significant digits, higher values are
/// clamped to it.
pub const MAX_PRECISION: u32 = 15;

const GEOMETRY_TYPES: [&str; 7] = [
    "Point",
    "MultiPoint",
    "LineString",
    "MultiLineString",
    "Polygon",
    "MultiPolygon",
    "GeometryCollection",
];

/// Reads all geometries of a GeoJSON document.
///
/// An empty (or whitespace only) text is an empty document. Features without geometry are skipped.
pub fn read_geometries(text: &str) -> Result<Vec<Geom<Point2d>>, CairnError> {
    if text.trim().is_empty() {
        return Ok(vec![]);
    }

    let json: serde_json::Value =
        serde_json::from_str(text).map_err(|err| CairnError::GeoJson(err.to_string()))?;
    check_geometry_types(&json)?;

    let geometries = match GeoJson::from_json_value(json)? {
        GeoJson::Geometry(geometry) => vec![Geom::try_from(&geometry)?],
        GeoJson::Feature(feature) => feature_geometry(&feature)?.into_iter().collect(),
        GeoJson::FeatureCollection(collection) => collection
            .features
            .iter()
            .filter_map(|feature| feature_geometry(feature).transpose())
            .collect::<Result<_, _>>()?,
    };

    Ok(geometries)
}

/// Writes the result of a reconciliation as a feature collection.
pub fn write_reconciliation(
    reconciliation: &Reconciliation<Point2d>,
    precision: Option<u32>,
) -> Result<String, CairnError> {
    write_geometries(&reconciliation.geometries().collect::<Vec<_>>(), precision)
}

/// Writes the geometries as a feature collection, one feature per geometry.
///
/// With `precision` set, coordinates are rounded to that number of decimals, at most [`MAX_PRECISION`].
pub fn write_geometries<'a>(
    geometries: impl IntoIterator<Item = &'a Geom<Point2d>>,
    precision: Option<u32>,
) -> Result<String, CairnError> {
    let factor = precision.map(|precision| 10f64.powi(precision.min(MAX_PRECISION) as i32));
    let features = geometries
        .into_iter()
        .map(|geometry| {
            let mut value = Value::from(geometry);
            if let Some(factor) = factor {
                round_value(&mut value, factor);
            }

            Feature {
                bbox: None,
                geometry: Some(geojson::Geometry::new(value)),
                id: None,
                properties: None,
                foreign_members: None,
            }
        })
        .collect();

    let collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };

    Ok(serde_json::to_string(&collection)?)
}

fn feature_geometry(feature: &Feature) -> Result<Option<Geom<Point2d>>, CairnError> {
    Ok(feature
        .geometry
        .as_ref()
        .map(Geom::try_from)
        .transpose()?)
}

/// The `geojson` parser reports unknown types inconsistently depending on where they are, so they are looked for
/// before parsing.
fn check_geometry_types(value: &serde_json::Value) -> Result<(), CairnError> {
    let Some(object) = value.as_object() else {
        return Ok(());
    };

    let children = move |key: &str| {
        object
            .get(key)
            .and_then(serde_json::Value::as_array)
            .into_iter()
            .flatten()
    };

    match object.get("type").and_then(serde_json::Value::as_str) {
        Some("FeatureCollection") => children("features").try_for_each(check_geometry_types),
        Some("GeometryCollection") => children("geometries").try_for_each(check_geometry_types),
        Some("Feature") => object
            .get("geometry")
            .map_or(Ok(()), check_geometry_types),
        Some(kind) if !GEOMETRY_TYPES.contains(&kind) => {
            Err(CairnError::UnsupportedGeometryType(kind.to_string()))
        }
        _ => Ok(()),
    }
}

fn round_value(value: &mut Value, factor: f64) {
    match value {
        Value::Point(position) => round_position(position, factor),
        Value::MultiPoint(positions) | Value::LineString(positions) => {
            positions.iter_mut().for_each(|p| round_position(p, factor))
        }
        Value::MultiLineString(lines) | Value::Polygon(lines) => lines
            .iter_mut()
            .flatten()
            .for_each(|p| round_position(p, factor)),
        Value::MultiPolygon(polygons) => polygons
            .iter_mut()
            .flatten()
            .flatten()
            .for_each(|p| round_position(p, factor)),
        Value::GeometryCollection(geometries) => geometries
            .iter_mut()
            .for_each(|g| round_value(&mut g.value, factor)),
    }
}

fn round_position(position: &mut Position, factor: f64) {
    for coord in position.iter_mut() {
        let rounded = (*coord * factor).round() / factor;
        if rounded.is_finite() {
            *coord = rounded;
        }
    }
}
