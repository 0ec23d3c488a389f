//! Exact coordinate comparison.
//!
//! Coordinates are considered equal only if both of their components are equal as floating point numbers. There is no
//! tolerance: two points that differ by a rounding error are different points, and lines ending in them will not be
//! merged.

use cairn_types::cartesian::CartesianPoint2d;

/// Returns true if both coordinates are present and equal.
pub fn coords_equal<P: CartesianPoint2d>(a: Option<&P>, b: Option<&P>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.equal(b),
        _ => false,
    }
}

/// Returns true if the sequence is not empty and its first and last coordinates are equal.
pub fn is_closed<P: CartesianPoint2d>(points: &[P]) -> bool {
    coords_equal(points.first(), points.last())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairn_types::cartesian::Point2d;

    #[test]
    fn equality_is_exact() {
        let a = Point2d::new(1.0, 2.0);
        assert!(coords_equal(Some(&a), Some(&Point2d::new(1.0, 2.0))));
        assert!(!coords_equal(Some(&a), Some(&Point2d::new(1.0, 2.0 + 1e-12))));
        assert!(!coords_equal(Some(&a), None));
        assert!(!coords_equal::<Point2d>(None, None));
    }

    #[test]
    fn nan_is_never_equal() {
        let p = Point2d::new(f64::NAN, 0.0);
        assert!(!coords_equal(Some(&p), Some(&p)));
    }

    #[test]
    fn closed_sequences() {
        assert!(!is_closed::<Point2d>(&[]));
        assert!(is_closed(&[Point2d::new(3.0, 3.0)]));
        assert!(is_closed(&[
            Point2d::new(0.0, 0.0),
            Point2d::new(1.0, 0.0),
            Point2d::new(0.0, 0.0)
        ]));
        assert!(!is_closed(&[Point2d::new(0.0, 0.0), Point2d::new(1.0, 0.0)]));
    }
}
