//! Conversion between [`Geom`] and the `geojson` crate geometry values.
//!
//! Positions with more than two dimensions keep only `x` and `y`. Rings are taken as given: a polygon ring that does
//! not repeat its first point is not rejected, the editing layer decides what to do with it.

use crate::cartesian::{CartesianPoint2d, Point2d};
use crate::contour::{ClosedContour, Contour};
use crate::error::CairnTypesError;
use crate::geometry::Geom;
use crate::polygon::Polygon;
use geojson::{LineStringType, PolygonType, Position, Value};

impl TryFrom<&geojson::Geometry> for Geom<Point2d> {
    type Error = CairnTypesError;

    fn try_from(value: &geojson::Geometry) -> Result<Self, Self::Error> {
        Self::try_from(&value.value)
    }
}

impl TryFrom<&Value> for Geom<Point2d> {
    type Error = CairnTypesError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::Point(p) => Geom::Point(convert_point(p)?),
            Value::MultiPoint(points) => Geom::MultiPoint(convert_points(points)?),
            Value::LineString(line) => Geom::Contour(convert_contour(line)?),
            Value::MultiLineString(lines) => Geom::MultiContour(
                lines
                    .iter()
                    .map(convert_contour)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Polygon(polygon) => Geom::Polygon(convert_polygon(polygon)?),
            Value::MultiPolygon(mp) => Geom::MultiPolygon(
                mp.iter()
                    .map(convert_polygon)
                    .collect::<Result<_, _>>()?,
            ),
            Value::GeometryCollection(geometries) => Geom::Collection(
                geometries
                    .iter()
                    .map(Geom::try_from)
                    .collect::<Result<_, _>>()?,
            ),
        })
    }
}

impl From<&Geom<Point2d>> for Value {
    fn from(value: &Geom<Point2d>) -> Self {
        match value {
            Geom::Point(p) => Value::Point(position(p)),
            Geom::MultiPoint(points) => Value::MultiPoint(points.iter().map(position).collect()),
            Geom::Contour(contour) => Value::LineString(line_string(&contour.points)),
            Geom::MultiContour(contours) => Value::MultiLineString(
                contours.iter().map(|c| line_string(&c.points)).collect(),
            ),
            Geom::Polygon(polygon) => Value::Polygon(polygon_type(polygon)),
            Geom::MultiPolygon(polygons) => {
                Value::MultiPolygon(polygons.iter().map(polygon_type).collect())
            }
            Geom::Collection(geometries) => Value::GeometryCollection(
                geometries
                    .iter()
                    .map(|g| geojson::Geometry::new(Value::from(g)))
                    .collect(),
            ),
        }
    }
}

fn convert_point(position: &Position) -> Result<Point2d, CairnTypesError> {
    match position.as_slice() {
        [x, y, ..] => Ok(Point2d::new(*x, *y)),
        _ => Err(CairnTypesError::Conversion(
            "point must contain at least 2 dimensions".to_string(),
        )),
    }
}

fn convert_points(positions: &[Position]) -> Result<Vec<Point2d>, CairnTypesError> {
    positions.iter().map(convert_point).collect()
}

fn convert_contour(line_string: &LineStringType) -> Result<Contour<Point2d>, CairnTypesError> {
    Ok(Contour::new(convert_points(line_string)?))
}

fn convert_polygon(polygon: &PolygonType) -> Result<Polygon<Point2d>, CairnTypesError> {
    let mut rings = polygon
        .iter()
        .map(|ring| convert_points(ring).map(ClosedContour::new));
    let outer_contour = rings.next().transpose()?.unwrap_or_default();
    Ok(Polygon::new(outer_contour, rings.collect::<Result<_, _>>()?))
}

fn position(point: &Point2d) -> Position {
    vec![point.x(), point.y()]
}

fn line_string(points: &[Point2d]) -> LineStringType {
    points.iter().map(position).collect()
}

fn polygon_type(polygon: &Polygon<Point2d>) -> PolygonType {
    polygon
        .iter_contours()
        .map(|c| line_string(&c.points))
        .collect()
}
