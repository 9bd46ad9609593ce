mod graph;

pub use graph::{DualGraph, DualNode};

use std::collections::HashMap;

use crate::error::{Result, TopologyError};
use crate::topology::{FaceId, TopologyStore};

/// Builds the dual graph of a fully triangulated store.
///
/// Nodes follow the arena order of [`TopologyStore::triangles`]. Two nodes
/// are joined when a half-edge of one face has its twin in the other.
#[derive(Debug, Default)]
pub struct BuildDualGraph;

impl BuildDualGraph {
    /// Creates a new `BuildDualGraph` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the construction. The store is only read.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidTopology` if some face is not a
    /// triangle or a twin points outside the triangulation.
    pub fn execute(&self, store: &TopologyStore) -> Result<DualGraph> {
        let triangles = store.triangles()?;
        let points = store.points();
        let position: HashMap<FaceId, usize> = triangles
            .iter()
            .enumerate()
            .map(|(i, &(face, _))| (face, i))
            .collect();

        let nodes = triangles
            .iter()
            .map(|&(face, t)| DualNode::new(Some(face), t, &points))
            .collect();
        let mut graph = DualGraph::with_nodes(nodes);

        for (i, &(face, _)) in triangles.iter().enumerate() {
            for he in store.face_half_edges(face)? {
                let Some(twin) = store.half_edge(he)?.twin else {
                    continue;
                };
                let other = store.half_edge(twin)?.face;
                if other == face {
                    continue;
                }
                let j = position.get(&other).copied().ok_or_else(|| {
                    TopologyError::InvalidTopology("twin face is not a triangle".into())
                })?;
                graph.add_edge(i, j);
            }
        }

        tracing::debug!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            "dual graph built"
        );
        Ok(graph)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GalleryError;
    use crate::math::Point2;
    use crate::topology::Triangle;

    fn hexagon() -> Vec<Point2> {
        (0..6)
            .map(|i| {
                let a = f64::from(i) * std::f64::consts::PI / 3.0;
                Point2::new(a.cos(), a.sin())
            })
            .collect()
    }

    #[test]
    fn matches_shared_edge_construction() {
        let mut store = TopologyStore::from_polygon(&hexagon()).unwrap();
        store.add_diagonal(0, 2).unwrap();
        store.add_diagonal(2, 4).unwrap();
        store.add_diagonal(4, 0).unwrap();

        let graph = BuildDualGraph::new().execute(&store).unwrap();
        let triangles: Vec<Triangle> = graph.nodes().iter().map(|n| n.triangle).collect();
        let rebuilt = DualGraph::from_triangles(&triangles, &hexagon());

        assert_eq!(graph.len(), 4);
        assert_eq!(graph.edges(), rebuilt.edges());
        assert!(graph.is_tree());
        // The inner triangle touches the three outer ones.
        let inner = triangles
            .iter()
            .position(|&t| t == Triangle::new(0, 2, 4))
            .unwrap();
        assert_eq!(graph.degree(inner), 3);
        assert!(graph.nodes().iter().all(|n| n.face.is_some()));
    }

    #[test]
    fn rejects_untriangulated_store() {
        let store = TopologyStore::from_polygon(&hexagon()).unwrap();
        assert!(matches!(
            BuildDualGraph::new().execute(&store),
            Err(GalleryError::Topology(TopologyError::InvalidTopology(_)))
        ));
    }
}
