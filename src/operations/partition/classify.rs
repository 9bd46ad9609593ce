use crate::math::predicates::{cross, is_above};
use crate::math::{Point2, TOLERANCE};

/// Role of a vertex in the top-to-bottom sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexKind {
    /// Both neighbors below, convex: a face starts here.
    Start,
    /// Both neighbors above, convex: a face ends here.
    End,
    /// One neighbor above and one below.
    Regular,
    /// Both neighbors below, reflex (a split vertex). The interior lies
    /// above, so it needs a diagonal upward.
    MaxCusp,
    /// Both neighbors above, reflex (a merge vertex). The interior lies
    /// below, so it needs a diagonal downward.
    MinCusp,
}

impl VertexKind {
    /// Returns `true` for the two kinds that break monotonicity.
    #[must_use]
    pub fn is_cusp(self) -> bool {
        matches!(self, Self::MaxCusp | Self::MinCusp)
    }
}

/// Classifies `v` from its neighbors on a counter-clockwise boundary.
///
/// A turn that is not strictly convex counts as reflex; on a simple
/// boundary that only happens for edges folding back onto each other.
#[must_use]
pub fn classify(prev: &Point2, v: &Point2, next: &Point2) -> VertexKind {
    let prev_below = is_above(v, prev);
    let next_below = is_above(v, next);
    let convex = cross(prev, v, next) > TOLERANCE;
    match (prev_below, next_below, convex) {
        (true, true, true) => VertexKind::Start,
        (true, true, false) => VertexKind::MaxCusp,
        (false, false, true) => VertexKind::End,
        (false, false, false) => VertexKind::MinCusp,
        _ => VertexKind::Regular,
    }
}

/// Classifies every vertex of a counter-clockwise polygon.
#[must_use]
pub fn classify_polygon(points: &[Point2]) -> Vec<VertexKind> {
    let n = points.len();
    (0..n)
        .map(|i| classify(&points[(i + n - 1) % n], &points[i], &points[(i + 1) % n]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn square_has_start_end_and_regulars() {
        let kinds = classify_polygon(&pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]));
        assert_eq!(
            kinds,
            vec![
                VertexKind::Regular,
                VertexKind::End,
                VertexKind::Regular,
                VertexKind::Start,
            ]
        );
    }

    #[test]
    fn notch_from_below_is_max_cusp() {
        // A "W"-like bottom: vertex 2 pokes up into the interior.
        let kinds = classify_polygon(&pts(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (3.0, 2.0),
            (4.0, 0.0),
            (6.0, 0.0),
            (6.0, 5.0),
            (0.0, 5.0),
        ]));
        assert_eq!(kinds[2], VertexKind::MaxCusp);
        assert_eq!(kinds.iter().filter(|k| k.is_cusp()).count(), 1);
    }

    #[test]
    fn notch_from_above_is_min_cusp() {
        let kinds = classify_polygon(&pts(&[
            (0.0, 0.0),
            (6.0, 0.0),
            (6.0, 5.0),
            (4.0, 5.0),
            (3.0, 2.0),
            (2.0, 5.0),
            (0.0, 5.0),
        ]));
        assert_eq!(kinds[4], VertexKind::MinCusp);
        assert_eq!(kinds.iter().filter(|k| k.is_cusp()).count(), 1);
    }

    #[test]
    fn horizontal_neighbor_uses_tie_break() {
        // Neighbor to the left at equal height counts as above.
        let kind = classify(
            &Point2::new(2.0, 4.0),
            &Point2::new(2.0, 2.0),
            &Point2::new(0.0, 2.0),
        );
        assert_eq!(kind, VertexKind::MinCusp);
        // Neighbor to the right at equal height counts as below.
        let kind = classify(
            &Point2::new(4.0, 2.0),
            &Point2::new(2.0, 2.0),
            &Point2::new(2.0, 4.0),
        );
        assert_eq!(kind, VertexKind::Regular);
    }
}
