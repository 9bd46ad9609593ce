use std::cmp::Ordering;

use crate::math::predicates::{cross, sweep_cmp};
use crate::math::{Point2, TOLERANCE};
use crate::operations::Diagonal;

/// Which of the two boundary chains of a monotone face a vertex lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chain {
    Left,
    Right,
}

/// Computes the diagonals that triangulate one y-monotone face.
///
/// `cycle` is the face's counter-clockwise vertex cycle. Nothing is inserted
/// here; the caller commits the returned diagonals once the scan is done.
pub(super) fn monotone_diagonals(cycle: &[usize], points: &[Point2]) -> Vec<Diagonal> {
    let n = cycle.len();
    if n <= 3 {
        return Vec::new();
    }
    let sorted = sweep_sequence(cycle, points);

    let mut diagonals = Vec::new();
    let mut stack: Vec<(usize, Chain)> = vec![sorted[0], sorted[1]];
    for j in 2..n - 1 {
        let (u, side) = sorted[j];
        let Some(&(_, top_side)) = stack.last() else {
            break;
        };
        if side == top_side {
            let Some(mut last) = stack.pop() else {
                break;
            };
            while let Some(&top) = stack.last() {
                if !is_ear(&points[top.0], &points[last.0], &points[u], side) {
                    break;
                }
                diagonals.push(Diagonal::new(u, top.0));
                last = top;
                stack.pop();
            }
            stack.push(last);
            stack.push(sorted[j]);
        } else {
            while let Some((w, _)) = stack.pop() {
                // The bottom entry is already joined to `u` by the chain.
                if !stack.is_empty() {
                    diagonals.push(Diagonal::new(u, w));
                }
            }
            stack.push(sorted[j - 1]);
            stack.push(sorted[j]);
        }
    }

    let bottom = sorted[n - 1].0;
    if stack.len() > 2 {
        for &(w, _) in &stack[1..stack.len() - 1] {
            diagonals.push(Diagonal::new(bottom, w));
        }
    }
    diagonals
}

/// Returns `true` if the triangle `(top, last, u)` is a strictly convex ear
/// on the given chain. Collinear triples are never ears.
fn is_ear(top: &Point2, last: &Point2, u: &Point2, side: Chain) -> bool {
    let turn = cross(top, last, u);
    match side {
        Chain::Left => turn > TOLERANCE,
        Chain::Right => turn < -TOLERANCE,
    }
}

/// Orders the face's vertices top to bottom, tagging each with its chain.
///
/// The chain running forward from the topmost vertex and the chain running
/// forward from the bottommost vertex are compared by their mean horizontal
/// offset from the top-bottom line; the smaller offset is the left chain.
fn sweep_sequence(cycle: &[usize], points: &[Point2]) -> Vec<(usize, Chain)> {
    let n = cycle.len();
    let extreme = |want: Ordering| {
        (0..n)
            .reduce(|best, i| {
                if sweep_cmp(&points[cycle[i]], &points[cycle[best]]) == want {
                    i
                } else {
                    best
                }
            })
            .unwrap_or(0)
    };
    let top = extreme(Ordering::Less);
    let bottom = extreme(Ordering::Greater);

    let forward_from = |start: usize, stop: usize| -> Vec<usize> {
        let mut chain = Vec::new();
        let mut i = (start + 1) % n;
        while i != stop {
            chain.push(cycle[i]);
            i = (i + 1) % n;
        }
        chain
    };
    // Top-to-bottom along the cycle, and bottom-to-top along the cycle.
    let descending = forward_from(top, bottom);
    let ascending = forward_from(bottom, top);

    let (pt, pb) = (points[cycle[top]], points[cycle[bottom]]);
    let offset = |chain: &[usize]| -> f64 {
        if chain.is_empty() {
            return 0.0;
        }
        let sum: f64 = chain
            .iter()
            .map(|&v| {
                let p = points[v];
                let t = (p.y - pt.y) / (pb.y - pt.y);
                p.x - (pt.x + (pb.x - pt.x) * t)
            })
            .sum();
        #[allow(clippy::cast_precision_loss)]
        let len = chain.len() as f64;
        sum / len
    };
    let descending_is_left = offset(&descending) <= offset(&ascending);
    let (desc_side, asc_side) = if descending_is_left {
        (Chain::Left, Chain::Right)
    } else {
        (Chain::Right, Chain::Left)
    };

    let mut sequence = Vec::with_capacity(n);
    sequence.push((cycle[top], desc_side));
    sequence.extend(descending.into_iter().map(|v| (v, desc_side)));
    sequence.extend(ascending.into_iter().map(|v| (v, asc_side)));
    sequence.push((cycle[bottom], asc_side));
    sequence.sort_by(|a, b| sweep_cmp(&points[a.0], &points[b.0]));
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn triangle_needs_nothing() {
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        assert!(monotone_diagonals(&[0, 1, 2], &points).is_empty());
    }

    #[test]
    fn square_gets_one_diagonal() {
        let points = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let diagonals = monotone_diagonals(&[0, 1, 2, 3], &points);
        assert_eq!(diagonals, vec![Diagonal::new(0, 2)]);
    }

    #[test]
    fn left_chain_fan_to_bottom() {
        // Reflex left chain: nothing is an ear until the bottom closes it.
        let points = pts(&[(0.0, 10.0), (1.0, 7.0), (1.5, 4.0), (1.0, 1.0), (5.0, 0.0)]);
        let diagonals = monotone_diagonals(&[0, 1, 2, 3, 4], &points);
        assert_eq!(diagonals, vec![Diagonal::new(4, 1), Diagonal::new(4, 2)]);
    }

    #[test]
    fn collinear_chain_is_not_clipped() {
        let points = pts(&[(0.0, 4.0), (-1.0, 3.0), (-2.0, 2.0), (-3.0, 1.0), (0.0, 0.0)]);
        let diagonals = monotone_diagonals(&[0, 1, 2, 3, 4], &points);
        assert_eq!(diagonals, vec![Diagonal::new(4, 1), Diagonal::new(4, 2)]);
    }

    #[test]
    fn chain_labels_follow_geometry() {
        // Right chain carries all the interior vertices.
        let points = pts(&[(0.0, 0.0), (3.0, 1.0), (4.0, 3.0), (3.0, 5.0), (0.0, 6.0)]);
        let seq = sweep_sequence(&[0, 1, 2, 3, 4], &points);
        let order: Vec<usize> = seq.iter().map(|&(v, _)| v).collect();
        assert_eq!(order, vec![4, 3, 2, 1, 0]);
        assert_eq!(seq[1].1, Chain::Right);
        assert_eq!(seq[2].1, Chain::Right);
        assert_eq!(seq[3].1, Chain::Right);
    }
}
