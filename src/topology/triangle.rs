use crate::math::Point2;

/// A triangle of the final triangulation as three vertex indices.
///
/// Stored counter-clockwise and rotated so the smallest index comes first,
/// which makes equal triangles compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triangle([usize; 3]);

impl Triangle {
    /// Creates a triangle from a counter-clockwise vertex triple.
    #[must_use]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        if b < a && b < c {
            Self([b, c, a])
        } else if c < a && c < b {
            Self([c, a, b])
        } else {
            Self([a, b, c])
        }
    }

    /// The three vertex indices, counter-clockwise.
    #[must_use]
    pub fn vertices(&self) -> [usize; 3] {
        self.0
    }

    /// Returns `true` if `v` is a corner of this triangle.
    #[must_use]
    pub fn contains(&self, v: usize) -> bool {
        self.0.contains(&v)
    }

    /// The three edges as `(min, max)` index pairs.
    #[must_use]
    pub fn edges(&self) -> [(usize, usize); 3] {
        let [a, b, c] = self.0;
        [
            (a.min(b), a.max(b)),
            (b.min(c), b.max(c)),
            (c.min(a), c.max(a)),
        ]
    }

    /// Corner positions looked up in `points`.
    ///
    /// # Panics
    ///
    /// Panics if a corner index is out of bounds for `points`.
    #[must_use]
    pub fn corners(&self, points: &[Point2]) -> [Point2; 3] {
        self.0.map(|i| points[i])
    }
}
