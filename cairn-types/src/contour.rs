//! Contour is a sequence of points.
//!
//! Contours follow the OGC `LineString` convention: a contour is **closed** when it has at least one point and its
//! first and last points are exactly equal. There is no separate "closed" flag, so closing a contour means appending
//! its first point, and opening it means the ends stop matching.
//!
//! A [`ClosedContour`] is a contour that is used as a ring of a [`Polygon`](crate::Polygon). Its points are expected
//! to be closed, but [`ClosedContour::new`] does not check it, because rings read from external data are kept as they
//! were given. Use [`Contour::into_closed`] for a checked conversion.

use crate::cartesian::{CartesianPoint2d, CartesianPoint2dFloat, Orientation, Rect};
use crate::segment::Segment;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Sequence of points. See module level documentation for details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contour<P> {
    /// Points of the contour. For closed contours the last point repeats the first one.
    pub points: Vec<P>,
}

impl<P> Contour<P> {
    /// Creates a new contour.
    pub fn new(points: Vec<P>) -> Self {
        Self { points }
    }

    /// Number of points, including the repeated closing point.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the contour has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point.
    pub fn first(&self) -> Option<&P> {
        self.points.first()
    }

    /// Last point.
    pub fn last(&self) -> Option<&P> {
        self.points.last()
    }

    /// Reverses the order of the points in place.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Iterates over segments between consecutive points.
    pub fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, P>> {
        self.points.windows(2).map(|w| Segment(&w[0], &w[1]))
    }

    /// Consumes the contour returning its points.
    pub fn into_points(self) -> Vec<P> {
        self.points
    }
}

impl<P: CartesianPoint2d> Contour<P> {
    /// Whether the first and the last points of the contour are the same.
    pub fn is_closed(&self) -> bool {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => first.equal(last),
            _ => false,
        }
    }

    /// Converts the contour into a ring. Returns `None` if the contour is not closed.
    pub fn into_closed(self) -> Option<ClosedContour<P>> {
        if self.is_closed() {
            Some(ClosedContour {
                points: self.points,
            })
        } else {
            None
        }
    }

    /// Extent of the contour.
    pub fn bounding_rectangle(&self) -> Option<Rect<P::Num>> {
        Rect::from_points(self.points.iter())
    }
}

impl<N: Float, P: CartesianPoint2d<Num = N>> Contour<P> {
    /// Planar length of the contour: sum of its segment lengths.
    pub fn length(&self) -> N {
        self.iter_segments()
            .fold(N::zero(), |length, segment| length + segment.0.distance(segment.1))
    }
}

impl<P> Default for Contour<P> {
    fn default() -> Self {
        Self { points: vec![] }
    }
}

impl<P> From<Vec<P>> for Contour<P> {
    fn from(points: Vec<P>) -> Self {
        Self { points }
    }
}

/// A ring: closed contour used as a boundary of a polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosedContour<P> {
    /// Points of the ring. The last point is expected to repeat the first one.
    pub points: Vec<P>,
}

impl<P> Default for ClosedContour<P> {
    fn default() -> Self {
        Self { points: vec![] }
    }
}

impl<P> ClosedContour<P> {
    /// Creates a ring from points without checking that they are closed.
    pub fn new(points: Vec<P>) -> Self {
        Self { points }
    }

    /// Iterates over the ring sides.
    pub fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, P>> {
        self.points.windows(2).map(|w| Segment(&w[0], &w[1]))
    }
}

impl<P: CartesianPoint2d> ClosedContour<P> {
    /// Extent of the ring.
    pub fn bounding_rectangle(&self) -> Option<Rect<P::Num>> {
        Rect::from_points(self.points.iter())
    }

    /// Returns true if the `point` lies inside the ring or on one of its sides.
    ///
    /// Uses the winding number of the ring around the point, so self-overlapping rings count their inside once
    /// per winding. A ring that is not explicitly closed is treated as if its last point were connected to the first.
    pub fn contains_point<Point: CartesianPoint2d<Num = P::Num>>(&self, point: &Point) -> bool {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return false;
        };

        let closing = Segment(last, first);
        if closing.contains_point(point) || self.iter_segments().any(|s| s.contains_point(point)) {
            return true;
        }

        let mut wn = 0i64;
        let y = point.y();
        for Segment(from, to) in self.iter_segments().chain(std::iter::once(closing)) {
            if from.y() <= y {
                if to.y() > y && Orientation::triplet(from, to, point) == Orientation::Counterclockwise
                {
                    wn += 1;
                }
            } else if to.y() <= y
                && Orientation::triplet(from, to, point) == Orientation::Clockwise
            {
                wn -= 1;
            }
        }

        wn != 0
    }
}

impl<N: Float, P: CartesianPoint2d<Num = N>> ClosedContour<P> {
    /// Perimeter of the ring as stored: the closing side is counted only if the last point repeats the first one.
    pub fn length(&self) -> N {
        self.iter_segments()
            .fold(N::zero(), |length, segment| length + segment.0.distance(segment.1))
    }
}

impl<P> From<ClosedContour<P>> for Contour<P> {
    fn from(value: ClosedContour<P>) -> Self {
        Self {
            points: value.points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;

    fn square(size: f64) -> Vec<Point2d> {
        vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(size, 0.0),
            Point2d::new(size, size),
            Point2d::new(0.0, size),
            Point2d::new(0.0, 0.0),
        ]
    }

    #[test]
    fn closed_means_equal_ends() {
        assert!(!Contour::<Point2d>::new(vec![]).is_closed());
        assert!(Contour::new(vec![Point2d::new(1.0, 1.0)]).is_closed());
        assert!(Contour::new(square(1.0)).is_closed());
        assert!(!Contour::new(vec![Point2d::new(0.0, 0.0), Point2d::new(1.0, 0.0)]).is_closed());
    }

    #[test]
    fn into_closed() {
        assert!(Contour::new(square(1.0)).into_closed().is_some());
        assert!(Contour::new(square(1.0)[..4].to_vec())
            .into_closed()
            .is_none());
    }

    #[test]
    fn iter_segments() {
        let contour = Contour::new(vec![Point2d::new(0.0, 0.0)]);
        assert_eq!(contour.iter_segments().count(), 0);

        let contour = Contour::new(square(1.0));
        assert_eq!(contour.iter_segments().count(), 4);
        assert_eq!(
            contour.iter_segments().last().expect("has segments"),
            Segment(&Point2d::new(0.0, 1.0), &Point2d::new(0.0, 0.0))
        );
    }

    #[test]
    fn length() {
        let contour = Contour::new(vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(3.0, 4.0),
            Point2d::new(3.0, 6.0),
        ]);
        approx::assert_abs_diff_eq!(contour.length(), 7.0);
        assert_eq!(Contour::<Point2d>::default().length(), 0.0);
    }

    #[test]
    fn ring_contains_point() {
        let ring = ClosedContour::new(square(10.0));

        assert!(ring.contains_point(&Point2d::new(5.0, 5.0)));
        assert!(ring.contains_point(&Point2d::new(0.0, 0.0)));
        assert!(ring.contains_point(&Point2d::new(10.0, 3.0)));
        assert!(ring.contains_point(&Point2d::new(4.0, 10.0)));
        assert!(!ring.contains_point(&Point2d::new(10.5, 3.0)));
        assert!(!ring.contains_point(&Point2d::new(-1.0, 5.0)));
        assert!(!ClosedContour::<Point2d>::new(vec![]).contains_point(&Point2d::new(0.0, 0.0)));
    }

    #[test]
    fn ring_contains_point_both_windings() {
        let mut points = vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(1.0, 1.0),
            Point2d::new(1.0, 0.0),
            Point2d::new(0.0, 0.0),
        ];
        let ring = ClosedContour::new(points.clone());
        assert!(ring.contains_point(&Point2d::new(0.5, 0.0)));
        assert!(ring.contains_point(&Point2d::new(0.8, 0.1)));
        assert!(!ring.contains_point(&Point2d::new(0.2, 0.3)));
        assert!(!ring.contains_point(&Point2d::new(1.1, 0.0)));

        points.reverse();
        let ring = ClosedContour::new(points);
        assert!(ring.contains_point(&Point2d::new(0.8, 0.1)));
        assert!(!ring.contains_point(&Point2d::new(0.2, 0.3)));
    }

    #[test]
    fn concave_ring() {
        // U shape opening upwards
        let ring = ClosedContour::new(vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(3.0, 0.0),
            Point2d::new(3.0, 3.0),
            Point2d::new(2.0, 3.0),
            Point2d::new(2.0, 1.0),
            Point2d::new(1.0, 1.0),
            Point2d::new(1.0, 3.0),
            Point2d::new(0.0, 3.0),
            Point2d::new(0.0, 0.0),
        ]);
        assert!(ring.contains_point(&Point2d::new(0.5, 2.0)));
        assert!(ring.contains_point(&Point2d::new(2.5, 2.0)));
        assert!(!ring.contains_point(&Point2d::new(1.5, 2.0)));
        assert!(ring.contains_point(&Point2d::new(1.5, 0.5)));
    }
}
