use std::collections::BTreeMap;

use crate::error::{Result, TopologyError};
use crate::topology::Triangle;

use super::dual::DualGraph;

/// One of the three vertex colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Zero,
    One,
    Two,
}

impl Color {
    /// All colors in ascending order.
    pub const ALL: [Self; 3] = [Self::Zero, Self::One, Self::Two];

    /// Numeric value, 0 to 2.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Two => 2,
        }
    }

    /// The color that is neither `a` nor `b`, if they differ.
    #[must_use]
    pub fn third(a: Self, b: Self) -> Option<Self> {
        if a == b {
            return None;
        }
        Self::ALL.into_iter().find(|&c| c != a && c != b)
    }
}

/// Assignment of a color to each vertex index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coloring {
    colors: BTreeMap<usize, Color>,
}

impl Coloring {
    #[must_use]
    pub fn get(&self, vertex: usize) -> Option<Color> {
        self.colors.get(&vertex).copied()
    }

    /// Number of colored vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Vertices of one color, ascending.
    #[must_use]
    pub fn class(&self, color: Color) -> Vec<usize> {
        self.colors
            .iter()
            .filter(|&(_, &c)| c == color)
            .map(|(&v, _)| v)
            .collect()
    }

    /// `(vertex, color)` pairs by ascending vertex.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Color)> + '_ {
        self.colors.iter().map(|(&v, &c)| (v, c))
    }

    /// Returns `true` if every triangle has three distinct, assigned colors.
    #[must_use]
    pub fn is_proper<'a>(&self, triangles: impl IntoIterator<Item = &'a Triangle>) -> bool {
        triangles.into_iter().all(|t| {
            let [a, b, c] = t.vertices().map(|v| self.get(v));
            matches!((a, b, c), (Some(a), Some(b), Some(c)) if a != b && b != c && a != c)
        })
    }
}

impl FromIterator<(usize, Color)> for Coloring {
    fn from_iter<I: IntoIterator<Item = (usize, Color)>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

/// Properly 3-colors the vertices of a triangulation.
///
/// The first triangle is seeded with colors 0, 1, 2 in its vertex order.
/// A depth-first walk over the dual graph then reaches each neighboring
/// triangle through a shared edge whose two endpoints are already colored,
/// and gives the third vertex the remaining color.
pub struct ThreeColoring<'a> {
    dual: &'a DualGraph,
}

impl<'a> ThreeColoring<'a> {
    /// Creates a new `ThreeColoring` operation.
    #[must_use]
    pub fn new(dual: &'a DualGraph) -> Self {
        Self { dual }
    }

    /// Executes the coloring.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidTopology` if the graph is empty or
    /// disconnected, a triangle is reached with fewer than two colored
    /// corners, or a corner already carries a conflicting color.
    pub fn execute(&self) -> Result<Coloring> {
        let Some(first) = self.dual.node(0) else {
            return Err(TopologyError::InvalidTopology("dual graph is empty".into()).into());
        };
        let mut coloring = Coloring::default();
        for (v, color) in first.triangle.vertices().into_iter().zip(Color::ALL) {
            coloring.colors.insert(v, color);
        }

        let mut visited = vec![false; self.dual.len()];
        visited[0] = true;
        let mut stack = vec![0];
        while let Some(i) = stack.pop() {
            for j in self.dual.neighbors(i) {
                if visited[j] {
                    continue;
                }
                visited[j] = true;
                let triangle = self.dual.nodes()[j].triangle;
                color_triangle(&mut coloring, triangle)?;
                stack.push(j);
            }
        }

        if let Some(missed) = visited.iter().position(|&seen| !seen) {
            return Err(TopologyError::InvalidTopology(format!(
                "triangle {missed} is unreachable in the dual graph"
            ))
            .into());
        }
        tracing::debug!(vertices = coloring.len(), "coloring complete");
        Ok(coloring)
    }
}

fn color_triangle(coloring: &mut Coloring, triangle: Triangle) -> Result<()> {
    let corners = triangle.vertices();
    let colored: Vec<(usize, Color)> = corners
        .iter()
        .filter_map(|&v| coloring.get(v).map(|c| (v, c)))
        .collect();
    let conflict = || {
        TopologyError::InvalidTopology(format!(
            "conflicting colors on triangle {corners:?}"
        ))
    };
    match colored.as_slice() {
        [(_, a), (_, b)] => {
            let missing = Color::third(*a, *b).ok_or_else(conflict)?;
            if let Some(&v) = corners.iter().find(|&&v| coloring.get(v).is_none()) {
                coloring.colors.insert(v, missing);
            }
            Ok(())
        }
        [(_, a), (_, b), (_, c)] => {
            if Color::third(*a, *b) == Some(*c) {
                Ok(())
            } else {
                Err(conflict().into())
            }
        }
        _ => Err(TopologyError::InvalidTopology(format!(
            "triangle {corners:?} reached with fewer than two colored corners"
        ))
        .into()),
    }
}
