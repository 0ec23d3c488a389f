//! Flattening of arbitrary geometries into points and line fragments.

use cairn_types::cartesian::CartesianPoint2d;
use cairn_types::{Contour, Geom};

/// Points and line fragments extracted from a set of geometries.
///
/// Every contour and every polygon ring becomes a separate fragment, whatever the nesting of the source geometry was.
/// Fragments are not checked in any way: they can be empty, have a single point or be closed.
#[derive(Debug, Clone, PartialEq)]
pub struct Flattened<P> {
    /// Coordinates of all point geometries, in source order.
    pub points: Vec<P>,
    /// Line fragments, in source order.
    pub fragments: Vec<Contour<P>>,
}

impl<P> Default for Flattened<P> {
    fn default() -> Self {
        Self {
            points: vec![],
            fragments: vec![],
        }
    }
}

/// Flattens a single geometry. See [`Flattened::push_geometry`].
pub fn flatten<P: CartesianPoint2d + Clone>(geometry: &Geom<P>, cut: Option<&P>) -> Flattened<P> {
    let mut flattened = Flattened::default();
    flattened.push_geometry(geometry, cut);
    flattened
}

impl<P: CartesianPoint2d + Clone> Flattened<P> {
    /// Adds the points and fragments of the `geometry` after the ones already collected.
    ///
    /// Collections are descended in pre-order. If `cut` is given, every coordinate of a line or ring that is equal to
    /// it ends the current fragment and starts a new one, and the coordinate itself is dropped.
    pub fn push_geometry(&mut self, geometry: &Geom<P>, cut: Option<&P>) {
        match geometry {
            Geom::Point(point) => self.points.push(point.clone()),
            Geom::MultiPoint(points) => self.points.extend(points.iter().cloned()),
            Geom::Contour(contour) => self.push_sequence(&contour.points, cut),
            Geom::MultiContour(contours) => {
                for contour in contours {
                    self.push_sequence(&contour.points, cut);
                }
            }
            Geom::Polygon(polygon) => {
                for ring in polygon.iter_contours() {
                    self.push_sequence(&ring.points, cut);
                }
            }
            Geom::MultiPolygon(polygons) => {
                for ring in polygons.iter().flat_map(|p| p.iter_contours()) {
                    self.push_sequence(&ring.points, cut);
                }
            }
            Geom::Collection(geometries) => {
                for geometry in geometries {
                    self.push_geometry(geometry, cut);
                }
            }
        }
    }

    fn push_sequence(&mut self, points: &[P], cut: Option<&P>) {
        let Some(cut) = cut else {
            self.fragments.push(Contour::new(points.to_vec()));
            return;
        };

        let mut current = vec![];
        for point in points {
            if point.equal(cut) {
                self.fragments.push(Contour::new(std::mem::take(&mut current)));
            } else {
                current.push(point.clone());
            }
        }
        self.fragments.push(Contour::new(current));
    }
}
