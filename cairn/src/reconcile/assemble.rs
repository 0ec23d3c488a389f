//! Conversion of closed lines into polygon shells.

use cairn_types::cartesian::CartesianPoint2d;
use cairn_types::{ClosedContour, Contour, Polygon};

/// Lines and polygons produced by [`assemble`]. Polygons do not have holes yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembled<P> {
    /// Lines that stay lines.
    pub lines: Vec<Contour<P>>,
    /// Polygon shells made of closed lines.
    pub polygons: Vec<Polygon<P>>,
}

impl<P> Default for Assembled<P> {
    fn default() -> Self {
        Self {
            lines: vec![],
            polygons: vec![],
        }
    }
}

/// Turns closed lines into polygons.
///
/// * If `allow_polygons` is false every line is returned as it is.
/// * If `force_close` is true, open lines are closed by appending their first point.
/// * A closed line becomes a polygon. If the ring touches itself (a vertex other than the closing one repeats), the
///   loop between the first such pair of vertices is cut out and emitted as a separate polygon before the rest of
///   the ring. Only one loop is cut per line; the rest is left to the next reconciliation.
/// * Open lines stay lines.
pub fn assemble<P: CartesianPoint2d + Clone>(
    lines: Vec<Contour<P>>,
    allow_polygons: bool,
    force_close: bool,
) -> Assembled<P> {
    let mut assembled = Assembled::default();

    for mut line in lines {
        if !allow_polygons {
            assembled.lines.push(line);
            continue;
        }

        if force_close && !line.is_closed() {
            if let Some(first) = line.first().cloned() {
                line.points.push(first);
            }
        }

        if !line.is_closed() {
            assembled.lines.push(line);
            continue;
        }

        let mut points = line.into_points();
        if let Some(squeezed) = split_squeezed(&mut points) {
            assembled.polygons.push(Polygon::from(squeezed));
        }
        assembled
            .polygons
            .push(Polygon::from(ClosedContour::new(points)));
    }

    assembled
}

/// Cuts out the part of the ring between the first two equal vertices, closing it.
fn split_squeezed<P: CartesianPoint2d + Clone>(points: &mut Vec<P>) -> Option<ClosedContour<P>> {
    for i1 in 1..points.len().saturating_sub(1) {
        for i2 in 0..i1 {
            if points[i1].equal(&points[i2]) {
                let mut squeezed: Vec<P> = points.drain(i2..i1).collect();
                if let Some(first) = squeezed.first().cloned() {
                    squeezed.push(first);
                }
                return Some(ClosedContour::new(squeezed));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{line, pt, ring};

    #[test]
    fn closed_line_becomes_polygon() {
        let square = line(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]);

        let assembled = assemble(vec![square.clone()], true, false);
        assert!(assembled.lines.is_empty());
        assert_eq!(assembled.polygons.len(), 1);
        assert_eq!(assembled.polygons[0].outer_contour.points, square.points);
        assert!(assembled.polygons[0].inner_contours.is_empty());
    }

    #[test]
    fn open_line_stays_line() {
        let open = line(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);

        let assembled = assemble(vec![open.clone()], true, false);
        assert_eq!(assembled.lines, vec![open]);
        assert!(assembled.polygons.is_empty());
    }

    #[test]
    fn polygons_not_allowed() {
        let square = line(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.0, 0.0)]);

        let assembled = assemble(vec![square.clone()], false, true);
        assert_eq!(assembled.lines, vec![square]);
        assert!(assembled.polygons.is_empty());
    }

    #[test]
    fn force_close() {
        let assembled = assemble(vec![line(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)])], true, true);
        assert!(assembled.lines.is_empty());
        assert_eq!(
            assembled.polygons[0].outer_contour,
            ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)])
        );
    }

    #[test]
    fn splits_figure_eight() {
        let eight = line(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (2.0, 1.0),
            (2.0, 2.0),
            (1.0, 2.0),
            (1.0, 1.0),
            (0.0, 1.0),
            (0.0, 0.0),
        ]);

        let assembled = assemble(vec![eight], true, false);
        assert!(assembled.lines.is_empty());
        assert_eq!(assembled.polygons.len(), 2);
        assert_eq!(
            assembled.polygons[0].outer_contour,
            ring(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0), (1.0, 1.0)])
        );
        assert_eq!(
            assembled.polygons[1].outer_contour,
            ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)])
        );
    }

    #[test]
    fn splits_only_once_per_line() {
        // two loops hanging off the start vertex
        let clover = line(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 0.0),
            (-1.0, 0.0),
            (-1.0, -1.0),
            (0.0, 0.0),
            (0.0, 1.0),
            (-1.0, 1.0),
            (0.0, 0.0),
        ]);

        let assembled = assemble(vec![clover], true, false);
        assert_eq!(assembled.polygons.len(), 2);
        assert_eq!(assembled.polygons[0].outer_contour.points.len(), 4);
        assert_eq!(assembled.polygons[1].outer_contour.points.len(), 7);
        assert_eq!(assembled.polygons[1].outer_contour.points[0], pt(0.0, 0.0));
    }
}
