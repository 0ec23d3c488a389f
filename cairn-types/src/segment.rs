//! Straight line segments between two points.

use crate::cartesian::{CartesianPoint2d, Orientation};

/// A straight line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<P: CartesianPoint2d> Segment<'_, P> {
    /// Returns true if the point lies exactly on the segment, including its endpoints.
    pub fn contains_point<Point: CartesianPoint2d<Num = P::Num>>(&self, point: &Point) -> bool {
        Orientation::triplet(self.0, self.1, point) == Orientation::Collinear
            && in_range(point.x(), self.0.x(), self.1.x())
            && in_range(point.y(), self.0.y(), self.1.y())
    }
}

fn in_range<N: PartialOrd>(value: N, a: N, b: N) -> bool {
    if a <= b {
        a <= value && value <= b
    } else {
        b <= value && value <= a
    }
}
