use super::face::FaceId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a half-edge in the topology store.
    pub struct HalfEdgeId;
}

/// A directed edge bounding exactly one face.
///
/// The face lies to the left of the half-edge, so every face cycle runs
/// counter-clockwise.
#[derive(Debug, Clone)]
pub struct HalfEdgeData {
    /// Vertex this half-edge leaves from.
    pub origin: VertexId,
    /// Opposite half-edge of the same edge. `None` on the polygon boundary.
    pub twin: Option<HalfEdgeId>,
    /// Next half-edge around `face`.
    pub next: HalfEdgeId,
    /// Previous half-edge around `face`.
    pub prev: HalfEdgeId,
    /// The face this half-edge bounds.
    pub face: FaceId,
}
