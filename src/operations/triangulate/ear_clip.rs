use crate::math::predicates::{cross, point_in_triangle, point_on_segment};
use crate::math::{Point2, TOLERANCE};
use crate::operations::Diagonal;

/// Result of clipping one face.
#[derive(Debug, Default)]
pub(super) struct EarClipResult {
    pub diagonals: Vec<Diagonal>,
    /// Ears taken without passing the ear test.
    pub forced: usize,
}

/// Triangulates a simple counter-clockwise face by ear clipping.
///
/// When no valid ear remains (collinear or numerically degenerate runs),
/// the most convex vertex is clipped anyway and counted as forced.
pub(super) fn ear_clip(cycle: &[usize], points: &[Point2]) -> EarClipResult {
    let mut remaining = cycle.to_vec();
    let mut result = EarClipResult::default();

    while remaining.len() > 3 {
        let n = remaining.len();
        let corner = |i: usize| {
            (
                remaining[(i + n - 1) % n],
                remaining[i],
                remaining[(i + 1) % n],
            )
        };

        let ear = (0..n).find(|&i| {
            let (a, b, c) = corner(i);
            is_ear(&remaining, points, a, b, c)
        });
        let clip = match ear {
            Some(i) => i,
            None => {
                result.forced += 1;
                (0..n)
                    .max_by(|&i, &j| {
                        let (a, b, c) = corner(i);
                        let (d, e, f) = corner(j);
                        cross(&points[a], &points[b], &points[c])
                            .total_cmp(&cross(&points[d], &points[e], &points[f]))
                    })
                    .unwrap_or(0)
            }
        };

        let (a, _, c) = corner(clip);
        result.diagonals.push(Diagonal::new(a, c));
        remaining.remove(clip);
    }
    result
}

fn is_ear(remaining: &[usize], points: &[Point2], a: usize, b: usize, c: usize) -> bool {
    let (pa, pb, pc) = (&points[a], &points[b], &points[c]);
    if cross(pa, pb, pc) <= TOLERANCE {
        return false;
    }
    remaining
        .iter()
        .filter(|&&v| v != a && v != b && v != c)
        .all(|&v| {
            let p = &points[v];
            !point_in_triangle(p, pa, pb, pc) && !point_on_segment(p, pa, pc)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn convex_hexagon_clips_without_forcing() {
        let points = pts(&[
            (2.0, 0.0),
            (4.0, 1.0),
            (4.0, 3.0),
            (2.0, 4.0),
            (0.0, 3.0),
            (0.0, 1.0),
        ]);
        let result = ear_clip(&[0, 1, 2, 3, 4, 5], &points);
        assert_eq!(result.diagonals.len(), 3);
        assert_eq!(result.forced, 0);
    }

    #[test]
    fn reflex_vertex_is_never_clipped() {
        // Arrow shape; vertex 3 is reflex.
        let points = pts(&[(0.0, 0.0), (4.0, 2.0), (0.0, 4.0), (1.0, 2.0)]);
        let result = ear_clip(&[0, 1, 2, 3], &points);
        assert_eq!(result.diagonals, vec![Diagonal::new(3, 1)]);
        assert_eq!(result.forced, 0);
    }

    #[test]
    fn blocked_ear_is_skipped() {
        // Vertices 3 and 4 lie on the hypotenuse; chord 0-2 would run along it.
        let points = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (3.0, 3.0), (2.0, 2.0)]);
        let result = ear_clip(&[0, 1, 2, 3, 4], &points);
        assert_eq!(result.forced, 0);
        assert!(!result.diagonals.contains(&Diagonal::new(0, 2)));
        assert_eq!(result.diagonals.len(), 2);
    }

    #[test]
    fn fully_collinear_run_forces_ears() {
        // A sliver whose every corner is flat within tolerance.
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        let result = ear_clip(&[0, 1, 2, 3], &points);
        assert_eq!(result.diagonals.len(), 1);
        assert_eq!(result.forced, 1);
    }
}
