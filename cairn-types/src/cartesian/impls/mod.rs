mod point;

pub use point::{Point2, Point2d, Vector2};
