use crate::math::intersect_2d::segments_intersect;
use crate::math::Point2;

/// Returns `true` if the segment between boundary vertices `a` and `b` of a
/// face crosses none of the face's edges that are not incident to `a` or `b`.
///
/// `cycle` lists the face's vertex indices in boundary order. Touching and
/// collinear overlap count as crossing, so a segment grazing another vertex
/// is rejected.
#[must_use]
pub fn mutually_visible(cycle: &[usize], points: &[Point2], a: usize, b: usize) -> bool {
    let (pa, pb) = (&points[a], &points[b]);
    let n = cycle.len();
    (0..n).all(|i| {
        let (s, t) = (cycle[i], cycle[(i + 1) % n]);
        if s == a || s == b || t == a || t == b {
            return true;
        }
        !segments_intersect(pa, pb, &points[s], &points[t])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notch_above() -> Vec<Point2> {
        [
            (0.0, 0.0),
            (6.0, 0.0),
            (6.0, 5.0),
            (4.0, 5.0),
            (3.0, 2.0),
            (2.0, 5.0),
            (0.0, 5.0),
        ]
        .iter()
        .map(|&(x, y)| Point2::new(x, y))
        .collect()
    }

    #[test]
    fn clear_line_of_sight() {
        let points = notch_above();
        let cycle: Vec<usize> = (0..points.len()).collect();
        assert!(mutually_visible(&cycle, &points, 4, 0));
        assert!(mutually_visible(&cycle, &points, 4, 1));
    }

    #[test]
    fn blocked_by_notch() {
        let points = notch_above();
        let cycle: Vec<usize> = (0..points.len()).collect();
        // The segment between the two top-corner vertices passes below the
        // notch tip's edges.
        assert!(!mutually_visible(&cycle, &points, 3, 6));
        assert!(!mutually_visible(&cycle, &points, 2, 5));
    }

    #[test]
    fn grazing_a_vertex_is_blocked() {
        let points: Vec<Point2> = [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (2.0, 2.0), (0.0, 4.0)]
            .iter()
            .map(|&(x, y)| Point2::new(x, y))
            .collect();
        let cycle: Vec<usize> = (0..points.len()).collect();
        // 0 -> 2 passes exactly through vertex 3.
        assert!(!mutually_visible(&cycle, &points, 0, 2));
        assert!(mutually_visible(&cycle, &points, 0, 3));
    }
}
