//! Reconciliation of loosely drawn geometries into a canonical set of points, lines and polygons.
//!
//! A reconciliation pass goes through four steps:
//! 1. [`flatten`](flatten::flatten) every geometry into points and line fragments, optionally cutting lines at a
//!    vertex,
//! 2. [`merge`](merge::merge_lines) fragments that share an end point,
//! 3. [`assemble`](assemble::assemble) closed lines into polygon shells,
//! 4. [`nest`](holes::nest_holes) shells lying inside other shells as holes.
//!
//! The result is deterministic for a given input order, and running a pass over its own output gives the same output
//! again.

use cairn_types::cartesian::CartesianPoint2d;
use cairn_types::{Contour, Geom, Polygon};
use serde::{Deserialize, Serialize};

pub mod assemble;
pub mod compare;
pub mod flatten;
pub mod holes;
pub mod merge;

use assemble::{assemble, Assembled};
use flatten::Flattened;
use holes::nest_holes;
use merge::merge_lines;

/// Switches of a reconciliation pass.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileOptions {
    /// Open lines are allowed in the result. If false, every line is closed into a polygon (when polygons are
    /// allowed).
    pub allow_lines: bool,
    /// Closed lines are turned into polygons.
    pub allow_polygons: bool,
    /// Lines sharing an end point are joined.
    pub merge_lines: bool,
    /// Polygons lying inside other polygons become holes.
    pub make_holes: bool,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            allow_lines: true,
            allow_polygons: true,
            merge_lines: true,
            make_holes: true,
        }
    }
}

/// Result of a reconciliation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation<P> {
    /// Points, in source order.
    pub points: Vec<P>,
    /// Lines with at least 2 points.
    pub lines: Vec<Contour<P>>,
    /// Polygons with their holes.
    pub polygons: Vec<Polygon<P>>,
}

impl<P> Default for Reconciliation<P> {
    fn default() -> Self {
        Self {
            points: vec![],
            lines: vec![],
            polygons: vec![],
        }
    }
}

impl<P> Reconciliation<P> {
    /// Returns true if the result has no geometries at all.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.lines.is_empty() && self.polygons.is_empty()
    }

    /// Returns all lines followed by every polygon ring as a line, for formats that have no polygons.
    pub fn into_lines(self) -> Vec<Contour<P>> {
        self.lines
            .into_iter()
            .chain(
                self.polygons
                    .into_iter()
                    .flat_map(Polygon::into_contours)
                    .map(Contour::from),
            )
            .collect()
    }
}

impl<P: Clone> Reconciliation<P> {
    /// Each point, line and polygon of the result as a separate geometry: points first, then lines, then polygons.
    pub fn geometries(&self) -> impl Iterator<Item = Geom<P>> + '_ {
        self.points
            .iter()
            .cloned()
            .map(Geom::Point)
            .chain(self.lines.iter().cloned().map(Geom::Contour))
            .chain(self.polygons.iter().cloned().map(Geom::Polygon))
    }
}

/// Runs a reconciliation pass over the given geometries.
///
/// If `cut` is given, lines and rings are split at every vertex equal to it and the vertex is removed.
pub fn reconcile<'a, P: CartesianPoint2d + Clone + 'a>(
    geometries: impl IntoIterator<Item = &'a Geom<P>>,
    options: &ReconcileOptions,
    cut: Option<&P>,
) -> Reconciliation<P> {
    let mut flattened = Flattened::default();
    let mut geometry_count = 0;
    for geometry in geometries {
        flattened.push_geometry(geometry, cut);
        geometry_count += 1;
    }

    let Flattened { points, fragments } = flattened;
    let fragment_count = fragments.len();

    let lines = if options.merge_lines {
        merge_lines(fragments)
    } else {
        fragments
            .into_iter()
            .filter(|fragment| fragment.len() >= 2)
            .collect()
    };
    let line_count = lines.len();

    let Assembled { lines, polygons } = assemble(lines, options.allow_polygons, !options.allow_lines);
    let polygons = if options.make_holes {
        nest_holes(polygons)
    } else {
        polygons
    };

    log::debug!(
        "Reconciled {geometry_count} geometries ({fragment_count} fragments, {line_count} after merging) into {} points, {} lines, {} polygons with {} holes",
        points.len(),
        lines.len(),
        polygons.len(),
        polygons.iter().map(|p| p.inner_contours.len()).sum::<usize>(),
    );

    Reconciliation {
        points,
        lines,
        polygons,
    }
}
