pub mod face;
pub mod half_edge;
pub mod triangle;
pub mod vertex;

pub use face::{FaceData, FaceId};
pub use half_edge::{HalfEdgeData, HalfEdgeId};
pub use triangle::Triangle;
pub use vertex::{VertexData, VertexId};

use crate::error::TopologyError;
use crate::math::polygon_2d::{find_duplicate, signed_area_2d};
use crate::math::{Point2, TOLERANCE};
use slotmap::SlotMap;

/// Central arena that owns the half-edge subdivision of one polygon.
///
/// Entities reference each other via typed IDs (generational indices),
/// avoiding self-referential structures and enabling safe mutation.
/// Vertices keep the index they had in the input boundary; all public
/// operations that name vertices use those indices.
#[derive(Debug, Default)]
pub struct TopologyStore {
    vertices: SlotMap<VertexId, VertexData>,
    half_edges: SlotMap<HalfEdgeId, HalfEdgeData>,
    faces: SlotMap<FaceId, FaceData>,
    order: Vec<VertexId>,
}

impl TopologyStore {
    /// Builds the store for a counter-clockwise simple polygon.
    ///
    /// Creates one vertex and one half-edge per point and a single interior
    /// face. Boundary half-edges have no twin.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidPolygon` if fewer than 3 points are
    /// given, two points coincide, the enclosed area is below `TOLERANCE`,
    /// or the boundary is clockwise.
    pub fn from_polygon(points: &[Point2]) -> Result<Self, TopologyError> {
        let n = points.len();
        if n < 3 {
            return Err(TopologyError::InvalidPolygon(format!(
                "at least 3 vertices required, got {n}"
            )));
        }
        if let Some((i, j)) = find_duplicate(points) {
            return Err(TopologyError::InvalidPolygon(format!(
                "vertices {i} and {j} coincide"
            )));
        }
        let area = signed_area_2d(points);
        if area.abs() < TOLERANCE {
            return Err(TopologyError::InvalidPolygon(format!(
                "area {area:e} is below tolerance"
            )));
        }
        if area < 0.0 {
            return Err(TopologyError::InvalidPolygon(
                "clockwise boundary; expected counter-clockwise".into(),
            ));
        }

        let mut store = Self::default();
        for (i, &point) in points.iter().enumerate() {
            let id = store.vertices.insert(VertexData::new(point, i));
            store.order.push(id);
        }

        let face = store.faces.insert(FaceData {
            half_edge: HalfEdgeId::default(),
        });
        let edges: Vec<HalfEdgeId> = store
            .order
            .iter()
            .map(|&origin| {
                store.half_edges.insert(HalfEdgeData {
                    origin,
                    twin: None,
                    next: HalfEdgeId::default(),
                    prev: HalfEdgeId::default(),
                    face,
                })
            })
            .collect();

        for i in 0..n {
            let he = &mut store.half_edges[edges[i]];
            he.next = edges[(i + 1) % n];
            he.prev = edges[(i + n - 1) % n];
            let vertex = &mut store.vertices[store.order[i]];
            vertex.half_edge = edges[i];
            vertex.faces.push(face);
        }
        store.faces[face].half_edge = edges[0];

        Ok(store)
    }

    // --- Vertex access ---

    /// Number of polygon vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Returns the arena ID of the vertex with input index `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range.
    pub fn vertex_id(&self, index: usize) -> Result<VertexId, TopologyError> {
        self.order
            .get(index)
            .copied()
            .ok_or_else(|| TopologyError::EntityNotFound(format!("vertex {index}")))
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Position of the vertex with input index `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range.
    pub fn point(&self, index: usize) -> Result<Point2, TopologyError> {
        Ok(self.vertex(self.vertex_id(index)?)?.point)
    }

    /// All vertex positions in input order.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        self.order.iter().map(|&id| self.vertices[id].point).collect()
    }

    // --- Half-edge access ---

    /// Returns a reference to the half-edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn half_edge(&self, id: HalfEdgeId) -> Result<&HalfEdgeData, TopologyError> {
        self.half_edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("half-edge".into()))
    }

    /// Number of half-edges, boundary and diagonal.
    #[must_use]
    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }

    // --- Face access ---

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, TopologyError> {
        self.faces
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// All face IDs in arena order.
    #[must_use]
    pub fn face_ids(&self) -> Vec<FaceId> {
        self.faces.keys().collect()
    }

    /// The boundary cycle of a face, starting at its stored half-edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the face does not exist or its cycle is broken.
    pub fn face_half_edges(&self, face: FaceId) -> Result<Vec<HalfEdgeId>, TopologyError> {
        let start = self.face(face)?.half_edge;
        let mut cycle = Vec::new();
        let mut current = start;
        loop {
            cycle.push(current);
            current = self.half_edge(current)?.next;
            if current == start {
                return Ok(cycle);
            }
            if cycle.len() > self.half_edges.len() {
                return Err(TopologyError::InvalidTopology(
                    "face cycle does not close".into(),
                ));
            }
        }
    }

    /// Input indices of the vertices around a face, counter-clockwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the face does not exist or its cycle is broken.
    pub fn face_vertices(&self, face: FaceId) -> Result<Vec<usize>, TopologyError> {
        self.face_half_edges(face)?
            .into_iter()
            .map(|he| Ok(self.vertex(self.half_edge(he)?.origin)?.index))
            .collect()
    }

    /// Undirected edges of a face as `(min, max)` index pairs, in cycle order.
    ///
    /// # Errors
    ///
    /// Returns an error if the face does not exist or its cycle is broken.
    pub fn face_edges(&self, face: FaceId) -> Result<Vec<(usize, usize)>, TopologyError> {
        let cycle = self.face_vertices(face)?;
        let n = cycle.len();
        Ok((0..n)
            .map(|i| {
                let (a, b) = (cycle[i], cycle[(i + 1) % n]);
                (a.min(b), a.max(b))
            })
            .collect())
    }

    /// Extracts every face as a triangle, in arena order.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidTopology` if some face is not a triangle.
    pub fn triangles(&self) -> Result<Vec<(FaceId, Triangle)>, TopologyError> {
        self.faces
            .keys()
            .map(|face| match self.face_vertices(face)?.as_slice() {
                &[a, b, c] => Ok((face, Triangle::new(a, b, c))),
                other => Err(TopologyError::InvalidTopology(format!(
                    "face with {} vertices is not a triangle",
                    other.len()
                ))),
            })
            .collect()
    }

    // --- Mutation ---

    /// Splits the face shared by two vertices with a new edge between them.
    ///
    /// Returns the two new faces: first the one bounded by the half-edge
    /// `from -> to`, then the one bounded by `to -> from`. The old face is
    /// removed. Geometric validity of the diagonal is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidDiagonal` if the endpoints are equal,
    /// share no face, or are already joined by an edge.
    pub fn add_diagonal(
        &mut self,
        from: usize,
        to: usize,
    ) -> Result<(FaceId, FaceId), TopologyError> {
        let invalid = |reason| TopologyError::InvalidDiagonal { from, to, reason };
        if from == to {
            return Err(invalid("endpoints are identical"));
        }
        let v1 = self.vertex_id(from)?;
        let v2 = self.vertex_id(to)?;

        let mut shared_but_adjacent = false;
        let mut split = None;
        for &face in &self.vertex(v1)?.faces {
            if !self.vertex(v2)?.faces.contains(&face) {
                continue;
            }
            let h1 = self.outgoing_in_face(v1, face)?;
            let h2 = self.outgoing_in_face(v2, face)?;
            let adjacent = self.half_edge(self.half_edge(h1)?.next)?.origin == v2
                || self.half_edge(self.half_edge(h2)?.next)?.origin == v1;
            if adjacent {
                shared_but_adjacent = true;
            } else {
                split = Some((face, h1, h2));
                break;
            }
        }
        let Some((face, h1, h2)) = split else {
            return Err(invalid(if shared_but_adjacent {
                "endpoints are already joined by an edge"
            } else {
                "endpoints share no face"
            }));
        };

        let old_cycle = self.face_half_edges(face)?;
        let p1 = self.half_edge(h1)?.prev;
        let p2 = self.half_edge(h2)?.prev;

        let d1 = self.half_edges.insert(HalfEdgeData {
            origin: v1,
            twin: None,
            next: h2,
            prev: p1,
            face,
        });
        let d2 = self.half_edges.insert(HalfEdgeData {
            origin: v2,
            twin: Some(d1),
            next: h1,
            prev: p2,
            face,
        });
        self.half_edges[d1].twin = Some(d2);
        self.half_edges[p1].next = d1;
        self.half_edges[h2].prev = d1;
        self.half_edges[p2].next = d2;
        self.half_edges[h1].prev = d2;

        for he in old_cycle {
            let origin = self.half_edges[he].origin;
            self.vertices[origin].faces.retain(|&f| f != face);
        }
        self.faces.remove(face);

        let first = self.faces.insert(FaceData { half_edge: d1 });
        let second = self.faces.insert(FaceData { half_edge: d2 });
        self.assign_face(first)?;
        self.assign_face(second)?;

        tracing::trace!(from, to, "inserted diagonal");
        Ok((first, second))
    }

    /// The half-edge leaving `vertex` along the boundary of `face`.
    fn outgoing_in_face(
        &self,
        vertex: VertexId,
        face: FaceId,
    ) -> Result<HalfEdgeId, TopologyError> {
        self.face_half_edges(face)?
            .into_iter()
            .find(|&he| self.half_edges[he].origin == vertex)
            .ok_or_else(|| {
                TopologyError::InvalidTopology("vertex face list out of sync".into())
            })
    }

    /// Stamps `face` on every half-edge of its cycle and records it on the
    /// cycle's vertices.
    fn assign_face(&mut self, face: FaceId) -> Result<(), TopologyError> {
        for he in self.face_half_edges(face)? {
            self.half_edges[he].face = face;
            let origin = self.half_edges[he].origin;
            self.vertices[origin].faces.push(face);
        }
        Ok(())
    }

    /// Verifies the structural invariants of the subdivision.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidTopology` naming the first violation.
    pub fn check_invariants(&self) -> Result<(), TopologyError> {
        let broken = |msg: &str| Err(TopologyError::InvalidTopology(msg.to_owned()));
        for (id, he) in &self.half_edges {
            if self.half_edge(he.next)?.prev != id || self.half_edge(he.prev)?.next != id {
                return broken("next/prev are not mutually inverse");
            }
            if let Some(twin) = he.twin {
                let other = self.half_edge(twin)?;
                if other.twin != Some(id) {
                    return broken("twin links are not symmetric");
                }
                if other.face == he.face {
                    return broken("twin half-edges bound the same face");
                }
                if self.half_edge(he.next)?.origin != other.origin {
                    return broken("twin does not run opposite");
                }
            }
        }
        let mut seen = 0;
        for (face, data) in &self.faces {
            for he in self.face_half_edges(face)? {
                if self.half_edges[he].face != face {
                    return broken("half-edge points to the wrong face");
                }
                seen += 1;
            }
            if self.half_edge(data.half_edge)?.face != face {
                return broken("face half-edge belongs to another face");
            }
        }
        if seen != self.half_edges.len() {
            return broken("some half-edges belong to no face cycle");
        }
        for vertex in self.vertices.values() {
            let he = self.half_edge(vertex.half_edge)?;
            if self.vertex(he.origin)?.index != vertex.index {
                return broken("vertex half-edge does not leave the vertex");
            }
        }
        Ok(())
    }
}
