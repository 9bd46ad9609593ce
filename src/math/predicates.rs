use std::cmp::Ordering;

use super::{Point2, TOLERANCE};

/// Turn direction of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Left turn (positive signed area).
    CounterClockwise,
    /// Right turn (negative signed area).
    Clockwise,
    /// The three points lie on one line within [`TOLERANCE`].
    Collinear,
}

/// Twice the signed area of triangle `(a, b, c)`.
///
/// Positive when `c` lies to the left of the directed line `a -> b`.
#[must_use]
pub fn cross(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Classifies the turn `a -> b -> c`.
#[must_use]
pub fn orientation(a: &Point2, b: &Point2, c: &Point2) -> Orientation {
    let value = cross(a, b, c);
    if value > TOLERANCE {
        Orientation::CounterClockwise
    } else if value < -TOLERANCE {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Returns `true` if `p` lies on the closed segment `a`-`b`.
#[must_use]
pub fn point_on_segment(p: &Point2, a: &Point2, b: &Point2) -> bool {
    if orientation(a, b, p) != Orientation::Collinear {
        return false;
    }
    within_box(p, a, b)
}

/// Bounding-box containment used once collinearity is already known.
pub(crate) fn within_box(p: &Point2, a: &Point2, b: &Point2) -> bool {
    p.x >= a.x.min(b.x) - TOLERANCE
        && p.x <= a.x.max(b.x) + TOLERANCE
        && p.y >= a.y.min(b.y) - TOLERANCE
        && p.y <= a.y.max(b.y) + TOLERANCE
}

/// Returns `true` if `p` lies strictly inside triangle `(a, b, c)`.
///
/// Points on an edge or vertex are not inside. Works for either winding.
#[must_use]
pub fn point_in_triangle(p: &Point2, a: &Point2, b: &Point2, c: &Point2) -> bool {
    let o1 = orientation(p, a, b);
    let o2 = orientation(p, b, c);
    let o3 = orientation(p, c, a);
    if [o1, o2, o3].contains(&Orientation::Collinear) {
        return false;
    }
    o1 == o2 && o2 == o3
}

/// Top-to-bottom sweep order.
///
/// `p` sorts before `q` when it is higher, or at equal height further left.
/// Exact comparisons keep the order total and deterministic.
#[must_use]
pub fn sweep_cmp(p: &Point2, q: &Point2) -> Ordering {
    q.y.total_cmp(&p.y).then(p.x.total_cmp(&q.x))
}

/// Returns `true` if `p` comes strictly before `q` in sweep order.
#[must_use]
pub fn is_above(p: &Point2, q: &Point2) -> bool {
    sweep_cmp(p, q) == Ordering::Less
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn orientation_turns() {
        assert_eq!(
            orientation(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, 1.0)),
            Orientation::CounterClockwise
        );
        assert_eq!(
            orientation(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, -1.0)),
            Orientation::Clockwise
        );
        assert_eq!(
            orientation(&p(0.0, 0.0), &p(1.0, 1.0), &p(3.0, 3.0)),
            Orientation::Collinear
        );
    }

    #[test]
    fn on_segment_checks_extent() {
        assert!(point_on_segment(&p(1.0, 1.0), &p(0.0, 0.0), &p(2.0, 2.0)));
        assert!(point_on_segment(&p(2.0, 2.0), &p(0.0, 0.0), &p(2.0, 2.0)));
        assert!(!point_on_segment(&p(3.0, 3.0), &p(0.0, 0.0), &p(2.0, 2.0)));
        assert!(!point_on_segment(&p(1.0, 0.0), &p(0.0, 0.0), &p(2.0, 2.0)));
    }

    #[test]
    fn triangle_interior_excludes_boundary() {
        let (a, b, c) = (p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0));
        assert!(point_in_triangle(&p(1.0, 1.0), &a, &b, &c));
        assert!(point_in_triangle(&p(1.0, 1.0), &a, &c, &b));
        assert!(!point_in_triangle(&p(2.0, 0.0), &a, &b, &c));
        assert!(!point_in_triangle(&p(0.0, 0.0), &a, &b, &c));
        assert!(!point_in_triangle(&p(3.0, 3.0), &a, &b, &c));
    }

    #[test]
    fn sweep_order_breaks_ties_leftward() {
        assert!(is_above(&p(0.0, 2.0), &p(0.0, 1.0)));
        assert!(is_above(&p(-1.0, 1.0), &p(1.0, 1.0)));
        assert!(!is_above(&p(1.0, 1.0), &p(1.0, 1.0)));

        let mut pts = vec![p(1.0, 0.0), p(3.0, 5.0), p(-2.0, 5.0), p(0.0, 2.0)];
        pts.sort_by(sweep_cmp);
        assert_eq!(pts, vec![p(-2.0, 5.0), p(3.0, 5.0), p(0.0, 2.0), p(1.0, 0.0)]);
    }
}
