use super::predicates::{orientation, within_box, Orientation};
use super::Point2;

/// Closed segment-segment intersection test in 2D.
///
/// Returns `true` if segments `a0`-`a1` and `b0`-`b1` share at least one point,
/// including touching endpoints and collinear overlap.
#[must_use]
pub fn segments_intersect(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let o1 = orientation(a0, a1, b0);
    let o2 = orientation(a0, a1, b1);
    let o3 = orientation(b0, b1, a0);
    let o4 = orientation(b0, b1, a1);

    if o1 != o2 && o3 != o4 && ![o1, o2, o3, o4].contains(&Orientation::Collinear) {
        return true;
    }

    // Touching and collinear cases.
    (o1 == Orientation::Collinear && within_box(b0, a0, a1))
        || (o2 == Orientation::Collinear && within_box(b1, a0, a1))
        || (o3 == Orientation::Collinear && within_box(a0, b0, b1))
        || (o4 == Orientation::Collinear && within_box(a1, b0, b1))
}

/// Returns `true` if two segments sharing the endpoint `shared` fold back onto
/// each other, i.e. overlap along more than the shared point.
#[must_use]
pub fn adjacent_segments_overlap(a: &Point2, shared: &Point2, b: &Point2) -> bool {
    if orientation(a, shared, b) != Orientation::Collinear {
        return false;
    }
    let da = a - shared;
    let db = b - shared;
    da.dot(&db) > 0.0
}
