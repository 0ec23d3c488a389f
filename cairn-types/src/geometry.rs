//! [`Geom`] is the closed set of geometry variants an editing session can contain.

use crate::cartesian::{CartesianPoint2d, Rect};
use crate::contour::Contour;
use crate::polygon::Polygon;
use serde::{Deserialize, Serialize};

/// Any supported geometry, including collections of other geometries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geom<P> {
    /// A single point.
    Point(P),
    /// A set of points.
    MultiPoint(Vec<P>),
    /// A line.
    Contour(Contour<P>),
    /// A set of lines.
    MultiContour(Vec<Contour<P>>),
    /// A polygon with optional holes.
    Polygon(Polygon<P>),
    /// A set of polygons.
    MultiPolygon(Vec<Polygon<P>>),
    /// A set of arbitrary geometries, possibly nested.
    Collection(Vec<Geom<P>>),
}

/// Type discriminant of a [`Geom`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    /// [`Geom::Point`]
    Point,
    /// [`Geom::MultiPoint`]
    MultiPoint,
    /// [`Geom::Contour`]
    Contour,
    /// [`Geom::MultiContour`]
    MultiContour,
    /// [`Geom::Polygon`]
    Polygon,
    /// [`Geom::MultiPolygon`]
    MultiPolygon,
    /// [`Geom::Collection`]
    Collection,
}

impl<P> Geom<P> {
    /// Type of the geometry.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geom::Point(_) => GeometryKind::Point,
            Geom::MultiPoint(_) => GeometryKind::MultiPoint,
            Geom::Contour(_) => GeometryKind::Contour,
            Geom::MultiContour(_) => GeometryKind::MultiContour,
            Geom::Polygon(_) => GeometryKind::Polygon,
            Geom::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geom::Collection(_) => GeometryKind::Collection,
        }
    }

    /// Iterates over every point of the geometry, descending into all nested parts.
    pub fn iter_points(&self) -> Box<dyn Iterator<Item = &P> + '_> {
        match self {
            Geom::Point(p) => Box::new(std::iter::once(p)),
            Geom::MultiPoint(points) => Box::new(points.iter()),
            Geom::Contour(contour) => Box::new(contour.points.iter()),
            Geom::MultiContour(contours) => {
                Box::new(contours.iter().flat_map(|c| c.points.iter()))
            }
            Geom::Polygon(polygon) => {
                Box::new(polygon.iter_contours().flat_map(|c| c.points.iter()))
            }
            Geom::MultiPolygon(polygons) => Box::new(
                polygons
                    .iter()
                    .flat_map(|p| p.iter_contours())
                    .flat_map(|c| c.points.iter()),
            ),
            Geom::Collection(geometries) => {
                Box::new(geometries.iter().flat_map(|g| g.iter_points()))
            }
        }
    }
}

impl<P: CartesianPoint2d> Geom<P> {
    /// Extent of the geometry. `None` for geometries without points.
    pub fn bounding_rectangle(&self) -> Option<Rect<P::Num>> {
        Rect::from_points(self.iter_points())
    }
}

impl<P> From<Contour<P>> for Geom<P> {
    fn from(value: Contour<P>) -> Self {
        Self::Contour(value)
    }
}

impl<P> From<Polygon<P>> for Geom<P> {
    fn from(value: Polygon<P>) -> Self {
        Self::Polygon(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;
    use crate::contour::ClosedContour;

    #[test]
    fn iter_points_descends_into_collections() {
        let geom = Geom::Collection(vec![
            Geom::Point(Point2d::new(-1.0, 0.0)),
            Geom::Collection(vec![Geom::MultiContour(vec![
                Contour::new(vec![Point2d::new(0.0, 0.0), Point2d::new(2.0, 3.0)]),
                Contour::new(vec![Point2d::new(5.0, 5.0)]),
            ])]),
            Geom::Polygon(Polygon::from(ClosedContour::new(vec![
                Point2d::new(0.0, -4.0),
                Point2d::new(1.0, -4.0),
                Point2d::new(0.0, -4.0),
            ]))),
        ]);

        assert_eq!(geom.kind(), GeometryKind::Collection);
        assert_eq!(geom.iter_points().count(), 7);
        assert_eq!(
            geom.bounding_rectangle(),
            Some(Rect::new(-1.0, -4.0, 5.0, 5.0))
        );
    }

    #[test]
    fn empty_geometry_has_no_extent() {
        let geom: Geom<Point2d> = Geom::Collection(vec![Geom::MultiPoint(vec![])]);
        assert_eq!(geom.bounding_rectangle(), None);
    }
}
