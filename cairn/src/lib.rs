//! Cairn is the editing core of a web map: it keeps the geometries that a user draws in a canonical state.
//!
//! Users draw loosely. A track is drawn in three strokes that touch at their ends, a field is outlined with a line that
//! comes back to its start, a pond is drawn as a separate shape inside the field. Cairn turns such drawings into a
//! consistent set of points, lines and polygons with holes, which is then stored as GeoJSON.
//!
//! # Quick start
//!
//! ```
//! use cairn::layer::EditLayerBuilder;
//! use cairn::control::{EditEvent, EditEventHandler};
//! use cairn::cairn_types::{Contour, Geom};
//! use cairn::cairn_types::cartesian::Point2d;
//!
//! let mut layer = EditLayerBuilder::new()
//!     .with_geojson(r#"{"type": "LineString", "coordinates": [[0, 0], [10, 0], [10, 10]]}"#)
//!     .build()?;
//! layer.handle(&EditEvent::Load)?;
//!
//! let closing = Contour::new(vec![Point2d::new(10.0, 10.0), Point2d::new(0.0, 0.0)]);
//! layer.handle(&EditEvent::DrawEnd(Geom::Contour(closing)))?;
//!
//! assert_eq!(layer.reconciliation().polygons.len(), 1);
//! println!("{}", layer.to_geojson());
//! # Ok::<(), cairn::error::CairnError>(())
//! ```
//!
//! # Main components
//!
//! * [`reconcile`] is the engine. It takes any number of geometries and runs them through flattening, line merging,
//!   polygon assembly and hole nesting. It is pure and synchronous, and can be used without the rest of the crate.
//! * [`EditLayer`](layer::EditLayer) owns the edited features. Every edit event runs a reconciliation pass and
//!   replaces the features with the result.
//! * [`control`] defines the events the editing surface sends to the layer.
//! * [`io::geojson`] reads and writes the persisted text.
//! * [`measure`] formats line lengths for display.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod control;
pub mod error;
pub mod io;
pub mod layer;
pub mod measure;
mod messenger;
pub mod reconcile;

#[cfg(test)]
pub(crate) mod tests;

pub use cairn_types;
pub use messenger::Messenger;
pub use reconcile::{reconcile, ReconcileOptions, Reconciliation};
