use crate::cartesian::traits::CartesianPoint2d;
use num_traits::{FromPrimitive, Num};
use serde::{Deserialize, Serialize};

/// Axis aligned rectangle, the extent of a geometry.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect<N = f64> {
    /// Minimum x.
    pub x_min: N,
    /// Minimum y.
    pub y_min: N,
    /// Maximum x.
    pub x_max: N,
    /// Maximum y.
    pub y_max: N,
}

impl<N: Num + Copy + PartialOrd + FromPrimitive> Rect<N> {
    /// Creates a new rectangle.
    pub fn new(x_min: N, y_min: N, x_max: N, y_max: N) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: if self.x_min < other.x_min {
                self.x_min
            } else {
                other.x_min
            },
            y_min: if self.y_min < other.y_min {
                self.y_min
            } else {
                other.y_min
            },
            x_max: if self.x_max > other.x_max {
                self.x_max
            } else {
                other.x_max
            },
            y_max: if self.y_max > other.y_max {
                self.y_max
            } else {
                other.y_max
            },
        }
    }

    /// Zero-size rectangle at the point.
    pub fn from_point(p: &impl CartesianPoint2d<Num = N>) -> Self {
        Self {
            x_min: p.x(),
            x_max: p.x(),
            y_min: p.y(),
            y_max: p.y(),
        }
    }

    /// Extent of the given points. Returns `None` if the iterator is empty.
    pub fn from_points<'a, P: CartesianPoint2d<Num = N> + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = points.next()?;
        Some(points.fold(Self::from_point(first), |rect, p| {
            rect.merge(Self::from_point(p))
        }))
    }

    /// Returns true if `other` lies fully inside this rectangle (touching borders allowed).
    pub fn contains_rect(&self, other: &Self) -> bool {
        self.x_min <= other.x_min
            && self.y_min <= other.y_min
            && self.x_max >= other.x_max
            && self.y_max >= other.y_max
    }
}

impl<N: Num + Copy + PartialOrd + FromPrimitive> FromIterator<Rect<N>> for Option<Rect<N>> {
    fn from_iter<T: IntoIterator<Item = Rect<N>>>(iter: T) -> Self {
        iter.into_iter().reduce(|curr, rect| curr.merge(rect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;

    #[test]
    fn from_points() {
        let points = [
            Point2d::new(1.0, 5.0),
            Point2d::new(-2.0, 3.0),
            Point2d::new(4.0, -1.0),
        ];
        let rect = Rect::from_points(points.iter()).expect("not empty");
        assert_eq!(rect, Rect::new(-2.0, -1.0, 4.0, 5.0));

        assert!(Rect::<f64>::from_points(std::iter::empty::<&Point2d>()).is_none());
    }

    #[test]
    fn containment_includes_border() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains_rect(&Rect::new(0.0, 4.0, 6.0, 10.0)));
        assert!(!rect.contains_rect(&Rect::new(1.0, 1.0, 11.0, 2.0)));
    }

    #[test]
    fn collect_merges() {
        let merged: Option<Rect> = vec![
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Rect::new(2.0, -1.0, 3.0, 0.5),
        ]
        .into_iter()
        .collect();
        assert_eq!(merged, Some(Rect::new(0.0, -1.0, 3.0, 1.0)));

        let empty: Option<Rect> = Vec::<Rect>::new().into_iter().collect();
        assert_eq!(empty, None);
    }
}
