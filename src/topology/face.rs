use super::half_edge::HalfEdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the topology store.
    pub struct FaceId;
}

/// Data associated with a face of the polygon subdivision.
///
/// Initially the single interior region of the polygon; after triangulation
/// every face is a triangle. The unbounded exterior is never stored.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// Any half-edge on the boundary cycle.
    pub half_edge: HalfEdgeId,
}
