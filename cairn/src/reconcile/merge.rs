//! Joining of line fragments that share an end point.

use super::compare::coords_equal;
use cairn_types::cartesian::CartesianPoint2d;
use cairn_types::Contour;

/// Merges fragments that have a common end point into longer lines.
///
/// Fragments with less than 2 points are dropped before merging. Fragments are kept in slots that never get renumbered:
/// for every pair of slots `(j, i)` with `j < i` the joined line replaces the fragment in the slot `j` and the slot `i`
/// is emptied. Passes over all pairs are repeated until nothing can be merged any more.
///
/// The ends are tried in this order (`lower` is the fragment in the slot `j`, `higher` in the slot `i`):
/// 1. `lower` ends where `higher` starts: `lower` followed by `higher`,
/// 2. both end at the same point: `lower` followed by reversed `higher`,
/// 3. `lower` starts where `higher` ends: `higher` followed by `lower`,
/// 4. both start at the same point: reversed `higher` followed by `lower`.
///
/// The shared point is kept once. The output keeps the slot order of the surviving fragments.
pub fn merge_lines<P: CartesianPoint2d + Clone>(fragments: Vec<Contour<P>>) -> Vec<Contour<P>> {
    let mut slots: Vec<Option<Contour<P>>> = fragments
        .into_iter()
        .filter(|fragment| fragment.len() >= 2)
        .map(Some)
        .collect();

    loop {
        let mut merged = false;
        for i in 1..slots.len() {
            for j in 0..i {
                let (Some(lower), Some(higher)) = (&slots[j], &slots[i]) else {
                    continue;
                };

                if let Some(joined) = join(lower, higher) {
                    slots[j] = Some(joined);
                    slots[i] = None;
                    merged = true;
                    break;
                }
            }
        }

        if !merged {
            break;
        }
    }

    slots.into_iter().flatten().collect()
}

fn join<P: CartesianPoint2d + Clone>(lower: &Contour<P>, higher: &Contour<P>) -> Option<Contour<P>> {
    let lower_points = lower.points.iter().cloned();
    let higher_points = higher.points.iter().cloned();

    let points: Vec<P> = if coords_equal(lower.last(), higher.first()) {
        lower_points.chain(higher_points.skip(1)).collect()
    } else if coords_equal(lower.last(), higher.last()) {
        lower_points.chain(higher_points.rev().skip(1)).collect()
    } else if coords_equal(lower.first(), higher.last()) {
        higher_points.chain(lower_points.skip(1)).collect()
    } else if coords_equal(lower.first(), higher.first()) {
        higher_points.rev().chain(lower_points.skip(1)).collect()
    } else {
        return None;
    };

    Some(Contour::new(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::line;

    #[test]
    fn joins_consecutive_fragments() {
        let merged = merge_lines(vec![
            line(&[(0.0, 0.0), (1.0, 1.0)]),
            line(&[(1.0, 1.0), (2.0, 2.0)]),
        ]);
        assert_eq!(merged, vec![line(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)])]);
    }

    #[test]
    fn end_combinations() {
        let lower = line(&[(0.0, 0.0), (1.0, 0.0)]);

        let merged = merge_lines(vec![lower.clone(), line(&[(2.0, 0.0), (1.0, 0.0)])]);
        assert_eq!(merged, vec![line(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)])]);

        let merged = merge_lines(vec![lower.clone(), line(&[(-1.0, 0.0), (0.0, 0.0)])]);
        assert_eq!(merged, vec![line(&[(-1.0, 0.0), (0.0, 0.0), (1.0, 0.0)])]);

        let merged = merge_lines(vec![lower, line(&[(0.0, 0.0), (-1.0, 0.0)])]);
        assert_eq!(merged, vec![line(&[(-1.0, 0.0), (0.0, 0.0), (1.0, 0.0)])]);
    }

    #[test]
    fn repeats_until_nothing_merges() {
        let merged = merge_lines(vec![
            line(&[(2.0, 2.0), (3.0, 3.0)]),
            line(&[(0.0, 0.0), (1.0, 1.0)]),
            line(&[(1.0, 1.0), (2.0, 2.0)]),
        ]);
        assert_eq!(
            merged,
            vec![line(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)])]
        );
    }

    #[test]
    fn result_does_not_depend_on_order_except_direction() {
        let a = line(&[(0.0, 0.0), (1.0, 0.0)]);
        let b = line(&[(1.0, 0.0), (1.0, 1.0)]);
        let c = line(&[(1.0, 1.0), (2.0, 1.0)]);
        let expected = line(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (2.0, 1.0)]);

        for order in [
            vec![a.clone(), b.clone(), c.clone()],
            vec![c.clone(), b.clone(), a.clone()],
            vec![b.clone(), a.clone(), c.clone()],
            vec![c.clone(), a.clone(), b.clone()],
        ] {
            let merged = merge_lines(order);
            assert_eq!(merged.len(), 1);

            let mut reversed = merged[0].clone();
            reversed.reverse();
            assert!(merged[0] == expected || reversed == expected);
        }
    }

    #[test]
    fn closes_a_ring_from_two_halves() {
        let merged = merge_lines(vec![
            line(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]),
            line(&[(1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]),
        ]);
        assert_eq!(merged.len(), 1);
        assert!(merged[0].is_closed());
        assert_eq!(merged[0].len(), 5);
    }

    #[test]
    fn drops_degenerate_fragments() {
        let merged = merge_lines(vec![
            line(&[]),
            line(&[(1.0, 1.0)]),
            line(&[(5.0, 5.0), (6.0, 6.0)]),
        ]);
        assert_eq!(merged, vec![line(&[(5.0, 5.0), (6.0, 6.0)])]);
    }

    #[test]
    fn disjoint_fragments_stay_apart() {
        let fragments = vec![
            line(&[(0.0, 0.0), (1.0, 0.0)]),
            line(&[(5.0, 5.0), (6.0, 6.0)]),
        ];
        assert_eq!(merge_lines(fragments.clone()), fragments);
    }
}
