pub mod coloring;
pub mod creation;
pub mod dual;
pub mod guards;
pub mod partition;
pub mod pipeline;
pub mod query;
pub mod triangulate;

/// A diagonal inserted between two polygon vertices, by input index.
///
/// `from` is the vertex that requested the diagonal: the cusp during
/// partitioning, the current sweep vertex during triangulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Diagonal {
    pub from: usize,
    pub to: usize,
}

impl Diagonal {
    /// Creates a diagonal from `from` to `to`.
    #[must_use]
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Endpoints as a `(min, max)` pair, for direction-free comparison.
    #[must_use]
    pub fn key(&self) -> (usize, usize) {
        (self.from.min(self.to), self.from.max(self.to))
    }
}
