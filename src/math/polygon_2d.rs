use super::intersect_2d::{adjacent_segments_overlap, segments_intersect};
use super::{Point2, Vector2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns the polygon in counter-clockwise order.
///
/// The flag is `true` when the input was clockwise and had to be reversed.
#[must_use]
pub fn ensure_ccw(points: &[Point2]) -> (Vec<Point2>, bool) {
    if signed_area_2d(points) < 0.0 {
        (points.iter().rev().copied().collect(), true)
    } else {
        (points.to_vec(), false)
    }
}

/// Arithmetic mean of a point set.
#[must_use]
pub fn centroid(points: &[Point2]) -> Point2 {
    if points.is_empty() {
        return Point2::origin();
    }
    #[allow(clippy::cast_precision_loss)]
    let inv = 1.0 / points.len() as f64;
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc, p| acc + p.coords);
    Point2::from(sum * inv)
}

/// Checks that a closed boundary does not touch itself.
///
/// Non-adjacent edges may not share any point; adjacent edges may only share
/// their common vertex. Quadratic in the vertex count.
#[must_use]
pub fn is_simple(points: &[Point2]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    for i in 0..n {
        let a0 = &points[i];
        let a1 = &points[(i + 1) % n];
        let a2 = &points[(i + 2) % n];
        if adjacent_segments_overlap(a0, a1, a2) {
            return false;
        }
        for j in (i + 2)..n {
            // Edge n-1 and edge 0 are adjacent through vertex 0.
            if i == 0 && j == n - 1 {
                continue;
            }
            let b0 = &points[j];
            let b1 = &points[(j + 1) % n];
            if segments_intersect(a0, a1, b0, b1) {
                return false;
            }
        }
    }
    true
}

/// Returns the first pair of input indices whose points coincide.
#[must_use]
pub fn find_duplicate(points: &[Point2]) -> Option<(usize, usize)> {
    let mut sorted: Vec<usize> = (0..points.len()).collect();
    sorted.sort_by(|&a, &b| {
        points[a]
            .x
            .total_cmp(&points[b].x)
            .then(points[a].y.total_cmp(&points[b].y))
    });
    sorted.windows(2).find_map(|w| {
        let (a, b) = (w[0].min(w[1]), w[0].max(w[1]));
        ((points[a] - points[b]).norm() < TOLERANCE).then_some((a, b))
    })
}
