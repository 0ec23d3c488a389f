//! Polygons with holes.

use crate::cartesian::{CartesianPoint2d, Rect};
use crate::contour::ClosedContour;
use serde::{Deserialize, Serialize};

/// Polygon geometry. Polygon consists of one outer contour, and zero or more inner contours.
///
/// Inner contours represent *holes* in a polygon. Holes are not checked to be inside the outer contour or to be
/// disjoint from each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon<P> {
    /// Outer contour.
    pub outer_contour: ClosedContour<P>,
    /// Inner contours.
    pub inner_contours: Vec<ClosedContour<P>>,
}

impl<P> Default for Polygon<P> {
    fn default() -> Self {
        Self {
            outer_contour: ClosedContour::default(),
            inner_contours: vec![],
        }
    }
}

impl<P> Polygon<P> {
    /// Creates a new polygon.
    pub fn new(outer_contour: ClosedContour<P>, inner_contours: Vec<ClosedContour<P>>) -> Self {
        Self {
            outer_contour,
            inner_contours,
        }
    }

    /// Iterates over all contours of the polygon starting with the outer one.
    pub fn iter_contours(&self) -> impl Iterator<Item = &ClosedContour<P>> {
        std::iter::once(&self.outer_contour).chain(self.inner_contours.iter())
    }

    /// Consumes the polygon returning all its contours, the outer one first.
    pub fn into_contours(self) -> impl Iterator<Item = ClosedContour<P>> {
        std::iter::once(self.outer_contour).chain(self.inner_contours)
    }
}

impl<P: CartesianPoint2d> Polygon<P> {
    /// Extent of the polygon.
    pub fn bounding_rectangle(&self) -> Option<Rect<P::Num>> {
        self.outer_contour.bounding_rectangle()
    }
}

impl<P> From<ClosedContour<P>> for Polygon<P> {
    fn from(value: ClosedContour<P>) -> Self {
        Self {
            outer_contour: value,
            inner_contours: vec![],
        }
    }
}
