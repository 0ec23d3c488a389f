use crate::cartesian::traits::CartesianPoint2d;
pub use nalgebra::{Point2, Vector2};
use nalgebra::Scalar;
use num_traits::{Bounded, FromPrimitive};

/// Point with `f64` coordinates, the coordinate type of the working projection.
pub type Point2d = Point2<f64>;

impl<Num: num_traits::Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive> CartesianPoint2d
    for Point2<Num>
{
    type Num = Num;

    fn x(&self) -> Num {
        self.x
    }
    fn y(&self) -> Num {
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_between_points() {
        let a = Point2d::new(4.0, 0.0);
        let b = Point2d::new(1.0, 4.0);
        assert_eq!(a.sub(&b), Vector2::new(3.0, -4.0));
        assert_eq!(a.distance_sq(&b), 25.0);
    }

    #[test]
    fn exact_equality() {
        let a = Point2d::new(0.1 + 0.2, 1.0);
        assert!(!a.equal(&Point2d::new(0.3, 1.0)));
        assert!(a.equal(&Point2d::new(0.1 + 0.2, 1.0)));
        approx::assert_abs_diff_eq!(a, Point2d::new(0.3, 1.0), epsilon = 1e-12);
    }
}
