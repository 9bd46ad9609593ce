use crate::topology::Triangle;

/// Finds the triangles that contain no guard.
///
/// Every point of a triangle is visible from each of its corners, so a
/// triangulation in which every triangle has a guarded corner is covered.
pub struct GuardCoverage<'a> {
    triangles: &'a [Triangle],
    guards: &'a [usize],
}

impl<'a> GuardCoverage<'a> {
    /// Creates a new `GuardCoverage` query.
    #[must_use]
    pub fn new(triangles: &'a [Triangle], guards: &'a [usize]) -> Self {
        Self { triangles, guards }
    }

    /// Executes the query, returning the positions of unguarded triangles.
    /// An empty result means full coverage.
    #[must_use]
    pub fn execute(&self) -> Vec<usize> {
        self.triangles
            .iter()
            .enumerate()
            .filter(|(_, t)| !self.guards.iter().any(|&g| t.contains(g)))
            .map(|(i, _)| i)
            .collect()
    }
}
