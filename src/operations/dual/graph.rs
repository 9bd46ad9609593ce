use std::collections::{BTreeSet, HashMap};

use crate::math::polygon_2d::centroid;
use crate::math::Point2;
use crate::topology::{FaceId, Triangle};

/// One triangle of the triangulation, seen as a node of the dual graph.
#[derive(Debug, Clone, PartialEq)]
pub struct DualNode {
    /// Arena face the triangle was read from, if built from a store.
    pub face: Option<FaceId>,
    pub triangle: Triangle,
    pub centroid: Point2,
}

impl DualNode {
    /// Creates a node, computing the triangle's centroid from `points`.
    ///
    /// # Panics
    ///
    /// Panics if a corner index is out of bounds for `points`.
    #[must_use]
    pub fn new(face: Option<FaceId>, triangle: Triangle, points: &[Point2]) -> Self {
        Self {
            face,
            triangle,
            centroid: centroid(&triangle.corners(points)),
        }
    }
}

/// Undirected adjacency between triangles that share an edge.
///
/// Node `i` is the `i`-th triangle of the list the graph was built from.
/// Neighbor sets are ordered, so traversals are deterministic.
#[derive(Debug, Clone, Default)]
pub struct DualGraph {
    nodes: Vec<DualNode>,
    adjacency: Vec<BTreeSet<usize>>,
}

impl DualGraph {
    /// Creates a graph with the given nodes and no edges.
    #[must_use]
    pub fn with_nodes(nodes: Vec<DualNode>) -> Self {
        let adjacency = vec![BTreeSet::new(); nodes.len()];
        Self { nodes, adjacency }
    }

    /// Builds the graph from a bare triangle list by matching shared edges.
    ///
    /// Two triangles are adjacent when they are the only two triangles using
    /// an edge.
    ///
    /// # Panics
    ///
    /// Panics if a corner index is out of bounds for `points`.
    #[must_use]
    pub fn from_triangles(triangles: &[Triangle], points: &[Point2]) -> Self {
        let nodes = triangles
            .iter()
            .map(|&t| DualNode::new(None, t, points))
            .collect();
        let mut graph = Self::with_nodes(nodes);

        let mut users: HashMap<(usize, usize), Vec<usize>> = HashMap::new();
        for (i, t) in triangles.iter().enumerate() {
            for edge in t.edges() {
                users.entry(edge).or_default().push(i);
            }
        }
        for shared in users.values() {
            if let &[a, b] = shared.as_slice() {
                graph.add_edge(a, b);
            }
        }
        graph
    }

    /// Connects nodes `a` and `b`. Self-loops and out-of-range nodes are
    /// ignored.
    pub fn add_edge(&mut self, a: usize, b: usize) {
        if a == b || a >= self.nodes.len() || b >= self.nodes.len() {
            return;
        }
        self.adjacency[a].insert(b);
        self.adjacency[b].insert(a);
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn nodes(&self) -> &[DualNode] {
        &self.nodes
    }

    #[must_use]
    pub fn node(&self, i: usize) -> Option<&DualNode> {
        self.nodes.get(i)
    }

    /// Neighbors of node `i` in ascending order. Empty for unknown nodes.
    pub fn neighbors(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.get(i).into_iter().flatten().copied()
    }

    #[must_use]
    pub fn degree(&self, i: usize) -> usize {
        self.adjacency.get(i).map_or(0, BTreeSet::len)
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Undirected edges as `(low, high)` node pairs, ascending.
    #[must_use]
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(a, set)| set.range(a + 1..).map(move |&b| (a, b)))
            .collect()
    }

    /// Returns `true` if every node is reachable from node 0.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        if self.nodes.is_empty() {
            return true;
        }
        let mut seen = vec![false; self.nodes.len()];
        seen[0] = true;
        let mut stack = vec![0];
        let mut reached = 1;
        while let Some(i) = stack.pop() {
            for j in self.neighbors(i) {
                if !seen[j] {
                    seen[j] = true;
                    reached += 1;
                    stack.push(j);
                }
            }
        }
        reached == self.nodes.len()
    }

    /// Returns `true` for a connected graph with one edge fewer than nodes.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.is_connected() && self.edge_count() + 1 == self.nodes.len().max(1)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn fan() -> (Vec<Triangle>, Vec<Point2>) {
        let points = (0..6)
            .map(|i| {
                let a = f64::from(i) * std::f64::consts::PI / 3.0;
                Point2::new(a.cos(), a.sin())
            })
            .collect();
        let triangles = vec![
            Triangle::new(0, 1, 2),
            Triangle::new(0, 2, 3),
            Triangle::new(0, 3, 4),
            Triangle::new(0, 4, 5),
        ];
        (triangles, points)
    }

    #[test]
    fn fan_is_a_path() {
        let (triangles, points) = fan();
        let graph = DualGraph::from_triangles(&triangles, &points);
        assert_eq!(graph.len(), 4);
        assert_eq!(graph.edges(), vec![(0, 1), (1, 2), (2, 3)]);
        assert_eq!(graph.degree(0), 1);
        assert_eq!(graph.degree(1), 2);
        assert!(graph.is_tree());
    }

    #[test]
    fn centroid_is_corner_mean() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(0.0, 3.0),
        ];
        let graph = DualGraph::from_triangles(&[Triangle::new(0, 1, 2)], &points);
        let c = graph.nodes()[0].centroid;
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 1.0);
        assert!(graph.nodes()[0].face.is_none());
    }

    #[test]
    fn disjoint_triangles_are_not_connected() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(5.0, 5.0),
            Point2::new(6.0, 5.0),
            Point2::new(5.0, 6.0),
        ];
        let graph =
            DualGraph::from_triangles(&[Triangle::new(0, 1, 2), Triangle::new(3, 4, 5)], &points);
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.is_connected());
        assert!(!graph.is_tree());
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn corner_outside_points_panics() {
        let (triangles, points) = fan();
        let _ = DualGraph::from_triangles(&triangles, &points[..3]);
    }

    #[test]
    fn add_edge_ignores_bad_endpoints() {
        let (triangles, points) = fan();
        let mut graph = DualGraph::from_triangles(&triangles, &points);
        graph.add_edge(0, 0);
        graph.add_edge(0, 42);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.neighbors(42).count(), 0);
    }
}
