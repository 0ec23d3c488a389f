//! Types and functions on geometries in cartesian coordinates.

mod impls;
mod orient;
mod rect;
mod traits;

pub use impls::{Point2, Point2d, Vector2};
pub use orient::Orientation;
pub use rect::Rect;
pub use traits::*;
