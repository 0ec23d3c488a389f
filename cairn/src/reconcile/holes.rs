//! Nesting of polygons inside other polygons as holes.

use cairn_types::cartesian::CartesianPoint2d;
use cairn_types::{ClosedContour, Polygon};

/// Makes every polygon that lies inside another one a hole of that polygon.
///
/// Polygons are checked pairwise in index order. When all vertices of the outer contour of `inner` are inside or on
/// the border of the outer contour of `outer`, that contour is appended to the holes of `outer` and `inner` is removed
/// from the set. Holes that `inner` had before are dropped. When two polygons contain each other (equal shells), the
/// one with the lower index keeps the other as a hole.
///
/// The result depends on the input order for shapes nested more than one level deep. With `a` containing `b`
/// containing `c`, the order `[a, b, c]` gives `a` with two holes, while `[b, c, a]` lets `b` absorb `c` first, so `c`
/// is lost when `a` then absorbs `b`.
///
/// The check uses vertices only, so a shell whose vertices are all inside but whose sides cross the container border
/// is still considered inside.
pub fn nest_holes<P: CartesianPoint2d>(polygons: Vec<Polygon<P>>) -> Vec<Polygon<P>> {
    let mut slots: Vec<Option<Polygon<P>>> = polygons.into_iter().map(Some).collect();

    for outer in 0..slots.len() {
        for inner in 0..slots.len() {
            if outer == inner {
                continue;
            }

            let (Some(container), Some(candidate)) = (&slots[outer], &slots[inner]) else {
                continue;
            };
            if !encloses(&container.outer_contour, &candidate.outer_contour) {
                continue;
            }

            if let (Some(absorbed), Some(container)) = (slots[inner].take(), slots[outer].as_mut()) {
                container.inner_contours.push(absorbed.outer_contour);
            }
        }
    }

    slots.into_iter().flatten().collect()
}

fn encloses<P: CartesianPoint2d>(container: &ClosedContour<P>, candidate: &ClosedContour<P>) -> bool {
    let (Some(outer_rect), Some(inner_rect)) = (
        container.bounding_rectangle(),
        candidate.bounding_rectangle(),
    ) else {
        return false;
    };

    outer_rect.contains_rect(&inner_rect)
        && candidate
            .points
            .iter()
            .all(|point| container.contains_point(point))
}
