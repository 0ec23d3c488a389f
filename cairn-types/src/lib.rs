//! Geometry types used by the `cairn` editing layer.
//!
//! The types here are plain values: a [`Contour`] is a sequence of points with OGC `LineString` semantics, a
//! [`ClosedContour`] is a ring, a [`Polygon`] is one outer ring and any number of holes, and [`Geom`] is a closed tagged
//! union over all of them, including nested collections.
//!
//! All algorithms assume 2d cartesian coordinates in a single working projection (see
//! [`CartesianPoint2d`](cartesian::CartesianPoint2d)). Coordinates are compared exactly, there is no tolerance.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod cartesian;
pub mod contour;
pub mod error;
pub mod geometry;
pub mod polygon;
pub mod segment;

#[cfg(feature = "geojson")]
pub mod geojson;

#[cfg(feature = "geo-types")]
mod geo_types;

pub use contour::{ClosedContour, Contour};
pub use geometry::{Geom, GeometryKind};
pub use polygon::Polygon;
