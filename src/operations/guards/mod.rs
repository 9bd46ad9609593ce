use crate::error::{OperationError, Result};

use super::coloring::{Color, Coloring};

/// Which color class wins when several are equally small.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardTieBreak {
    /// The class with the lowest color value.
    #[default]
    LowestColor,
    /// The class containing the smallest vertex index.
    LowestVertex,
}

/// The chosen guard positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardSet {
    /// Color class the guards were drawn from.
    pub color: Color,
    /// Guard vertex indices, ascending.
    pub vertices: Vec<usize>,
}

impl GuardSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if `vertex` holds a guard.
    #[must_use]
    pub fn contains(&self, vertex: usize) -> bool {
        self.vertices.binary_search(&vertex).is_ok()
    }
}

/// Places guards on the smallest color class of a proper 3-coloring.
pub struct SelectGuards<'a> {
    coloring: &'a Coloring,
    tie_break: GuardTieBreak,
}

impl<'a> SelectGuards<'a> {
    /// Creates a new `SelectGuards` operation.
    #[must_use]
    pub fn new(coloring: &'a Coloring, tie_break: GuardTieBreak) -> Self {
        Self {
            coloring,
            tie_break,
        }
    }

    /// Executes the selection.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the coloring is empty.
    pub fn execute(&self) -> Result<GuardSet> {
        if self.coloring.is_empty() {
            return Err(OperationError::InvalidInput("coloring is empty".into()).into());
        }
        let classes = Color::ALL.map(|c| (c, self.coloring.class(c)));
        let smallest = classes.iter().map(|(_, vs)| vs.len()).min().unwrap_or(0);
        let mut tied = classes.into_iter().filter(|(_, vs)| vs.len() == smallest);

        let chosen = match self.tie_break {
            GuardTieBreak::LowestColor => tied.next(),
            GuardTieBreak::LowestVertex => {
                tied.min_by_key(|(_, vs)| vs.first().copied().unwrap_or(usize::MAX))
            }
        };
        let Some((color, vertices)) = chosen else {
            return Err(OperationError::Failed("no color class to choose from".into()).into());
        };

        tracing::debug!(?color, guards = vertices.len(), "guards selected");
        Ok(GuardSet { color, vertices })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GalleryError;
    use crate::math::Point2;
    use crate::operations::coloring::ThreeColoring;
    use crate::operations::dual::DualGraph;
    use crate::topology::Triangle;

    /// Coloring of the square split by diagonal 0-2: classes {0}, {2}, {1, 3}.
    fn square_coloring() -> Coloring {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ];
        let dual = DualGraph::from_triangles(
            &[Triangle::new(0, 2, 3), Triangle::new(0, 1, 2)],
            &points,
        );
        ThreeColoring::new(&dual).execute().unwrap()
    }

    #[test]
    fn lowest_color_wins_ties() {
        let guards = SelectGuards::new(&square_coloring(), GuardTieBreak::LowestColor)
            .execute()
            .unwrap();
        assert_eq!(guards.color, Color::Zero);
        assert_eq!(guards.vertices, vec![0]);
        assert!(guards.contains(0));
        assert!(!guards.contains(2));
    }

    #[test]
    fn pentagon_fan_guards_the_apex() {
        // Classes {2}, {0, 3}, {1, 4}; the apex class is the unique minimum.
        let points: Vec<Point2> = (0..5)
            .map(|i| {
                let a = f64::from(i) * 2.0 * std::f64::consts::PI / 5.0;
                Point2::new(a.cos(), a.sin())
            })
            .collect();
        let triangles = [
            Triangle::new(2, 3, 4),
            Triangle::new(2, 4, 0),
            Triangle::new(2, 0, 1),
        ];
        let dual = DualGraph::from_triangles(&triangles, &points);
        let coloring = ThreeColoring::new(&dual).execute().unwrap();
        for tie_break in [GuardTieBreak::LowestColor, GuardTieBreak::LowestVertex] {
            let guards = SelectGuards::new(&coloring, tie_break).execute().unwrap();
            assert_eq!(guards.color, Color::Zero);
            assert_eq!(guards.vertices, vec![2]);
        }
    }

    #[test]
    fn tie_break_policies_differ() {
        let coloring: Coloring = [(0, Color::One), (1, Color::Zero), (2, Color::Two)]
            .into_iter()
            .collect();

        let by_color = SelectGuards::new(&coloring, GuardTieBreak::LowestColor)
            .execute()
            .unwrap();
        assert_eq!(by_color.color, Color::Zero);
        assert_eq!(by_color.vertices, vec![1]);

        let by_vertex = SelectGuards::new(&coloring, GuardTieBreak::LowestVertex)
            .execute()
            .unwrap();
        assert_eq!(by_vertex.color, Color::One);
        assert_eq!(by_vertex.vertices, vec![0]);
    }

    #[test]
    fn empty_coloring_is_rejected() {
        assert!(matches!(
            SelectGuards::new(&Coloring::default(), GuardTieBreak::default()).execute(),
            Err(GalleryError::Operation(OperationError::InvalidInput(_)))
        ));
    }
}
