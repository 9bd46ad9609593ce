use crate::math::Point2;

use super::face::FaceId;
use super::half_edge::HalfEdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the topology store.
    pub struct VertexId;
}

/// Data associated with a polygon vertex.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// The 2D position of the vertex.
    pub point: Point2,
    /// Position of the vertex in the input boundary.
    pub index: usize,
    /// One half-edge leaving this vertex.
    pub half_edge: HalfEdgeId,
    /// Faces whose boundary passes through this vertex.
    pub faces: Vec<FaceId>,
}

impl VertexData {
    /// Creates a vertex with no incidence data yet.
    #[must_use]
    pub fn new(point: Point2, index: usize) -> Self {
        Self {
            point,
            index,
            half_edge: HalfEdgeId::default(),
            faces: Vec::new(),
        }
    }
}
