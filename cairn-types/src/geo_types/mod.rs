//! Conversions between the crate types and `geo-types` geometries.

use crate::cartesian::{CartesianPoint2d, Point2d};
use crate::contour::{ClosedContour, Contour};
use crate::geometry::Geom;
use crate::polygon::Polygon;
use geo_types::{coord, Coord, CoordNum, LineString};
use nalgebra::Scalar;
use num_traits::{Bounded, FromPrimitive};

impl<T: CoordNum + Bounded + Scalar + FromPrimitive> CartesianPoint2d for Coord<T> {
    type Num = T;

    fn x(&self) -> Self::Num {
        self.x
    }

    fn y(&self) -> Self::Num {
        self.y
    }
}

fn to_point(coord: Coord<f64>) -> Point2d {
    Point2d::new(coord.x, coord.y)
}

fn to_coord(point: Point2d) -> Coord<f64> {
    coord!(x: point.x, y: point.y)
}

impl From<LineString<f64>> for Contour<Point2d> {
    fn from(value: LineString<f64>) -> Self {
        Contour::new(value.0.into_iter().map(to_point).collect())
    }
}

impl From<Contour<Point2d>> for LineString<f64> {
    fn from(value: Contour<Point2d>) -> Self {
        LineString::new(value.points.into_iter().map(to_coord).collect())
    }
}

impl From<ClosedContour<Point2d>> for LineString<f64> {
    fn from(value: ClosedContour<Point2d>) -> Self {
        Contour::from(value).into()
    }
}

impl From<geo_types::Polygon<f64>> for Polygon<Point2d> {
    fn from(value: geo_types::Polygon<f64>) -> Self {
        let (exterior, interiors) = value.into_inner();
        Polygon::new(
            ClosedContour::new(exterior.0.into_iter().map(to_point).collect()),
            interiors
                .into_iter()
                .map(|ring| ClosedContour::new(ring.0.into_iter().map(to_point).collect()))
                .collect(),
        )
    }
}

impl From<Polygon<Point2d>> for geo_types::Polygon<f64> {
    fn from(value: Polygon<Point2d>) -> Self {
        geo_types::Polygon::new(
            value.outer_contour.into(),
            value.inner_contours.into_iter().map(Into::into).collect(),
        )
    }
}

impl From<Geom<Point2d>> for geo_types::Geometry<f64> {
    fn from(value: Geom<Point2d>) -> Self {
        match value {
            Geom::Point(p) => geo_types::Geometry::Point(to_coord(p).into()),
            Geom::MultiPoint(points) => geo_types::Geometry::MultiPoint(
                points
                    .into_iter()
                    .map(|p| geo_types::Point::from(to_coord(p)))
                    .collect(),
            ),
            Geom::Contour(contour) => geo_types::Geometry::LineString(contour.into()),
            Geom::MultiContour(contours) => geo_types::Geometry::MultiLineString(
                geo_types::MultiLineString::new(contours.into_iter().map(Into::into).collect()),
            ),
            Geom::Polygon(polygon) => geo_types::Geometry::Polygon(polygon.into()),
            Geom::MultiPolygon(polygons) => geo_types::Geometry::MultiPolygon(
                geo_types::MultiPolygon::new(polygons.into_iter().map(Into::into).collect()),
            ),
            Geom::Collection(geometries) => {
                geo_types::Geometry::GeometryCollection(geo_types::GeometryCollection::new_from(
                    geometries.into_iter().map(Into::into).collect(),
                ))
            }
        }
    }
}
