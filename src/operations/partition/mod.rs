mod classify;
mod visibility;

pub use classify::{classify, classify_polygon, VertexKind};
pub use visibility::mutually_visible;

use crate::error::{OperationError, Result};
use crate::math::predicates::{is_above, sweep_cmp};
use crate::math::Point2;
use crate::topology::{FaceId, TopologyStore};

use super::Diagonal;

/// Splits the polygon into y-monotone faces by resolving every cusp vertex.
///
/// # Algorithm
///
/// Vertices are swept from top to bottom. Each vertex is classified inside
/// each face it currently bounds, so cusps already resolved by an earlier
/// diagonal are skipped.
///
/// - A max-cusp is joined to the nearest mutually-visible vertex above it.
/// - A min-cusp is joined to the nearest mutually-visible vertex below it.
///
/// Candidates come from the cusp's own face and are tried in sweep order,
/// nearest first. Every direction on the open side of a cusp points into its
/// face, so a segment that crosses no face edge is a valid diagonal.
#[derive(Debug, Default)]
pub struct MonotonePartition;

impl MonotonePartition {
    /// Creates a new `MonotonePartition` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the partition, inserting diagonals into `store`.
    ///
    /// Returns the inserted diagonals in insertion order, each running from
    /// the cusp to its supporting vertex.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::UnresolvedCusp` if some cusp sees no vertex
    /// on its open side, which signals degenerate or collinear geometry.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<Vec<Diagonal>> {
        let points = store.points();
        let mut order: Vec<usize> = (0..points.len()).collect();
        order.sort_by(|&a, &b| sweep_cmp(&points[a], &points[b]));

        let mut diagonals = Vec::new();
        for v in order {
            let Some((cycle, kind)) = cusp_face(store, &points, v)? else {
                continue;
            };
            let target = supporting_vertex(&cycle, &points, v, kind)
                .ok_or(OperationError::UnresolvedCusp { vertex: v })?;
            store.add_diagonal(v, target)?;
            tracing::debug!(cusp = v, target, ?kind, "resolved cusp");
            diagonals.push(Diagonal::new(v, target));
        }

        tracing::debug!(
            diagonals = diagonals.len(),
            faces = store.face_count(),
            "monotone partition complete"
        );
        Ok(diagonals)
    }
}

/// Finds the face in which `v` is currently a cusp, if any.
///
/// Returns that face's vertex cycle and the cusp kind.
fn cusp_face(
    store: &TopologyStore,
    points: &[Point2],
    v: usize,
) -> Result<Option<(Vec<usize>, VertexKind)>> {
    let faces: Vec<FaceId> = store.vertex(store.vertex_id(v)?)?.faces.clone();
    for face in faces {
        let cycle = store.face_vertices(face)?;
        let n = cycle.len();
        let Some(pos) = cycle.iter().position(|&u| u == v) else {
            continue;
        };
        let prev = cycle[(pos + n - 1) % n];
        let next = cycle[(pos + 1) % n];
        let kind = classify(&points[prev], &points[v], &points[next]);
        if kind.is_cusp() {
            return Ok(Some((cycle, kind)));
        }
    }
    Ok(None)
}

/// Nearest vertex on the open side of cusp `v` that `v` can see.
fn supporting_vertex(
    cycle: &[usize],
    points: &[Point2],
    v: usize,
    kind: VertexKind,
) -> Option<usize> {
    let upward = kind == VertexKind::MaxCusp;
    let mut candidates: Vec<usize> = cycle
        .iter()
        .copied()
        .filter(|&u| {
            if upward {
                is_above(&points[u], &points[v])
            } else {
                is_above(&points[v], &points[u])
            }
        })
        .collect();
    candidates.sort_by(|&a, &b| sweep_cmp(&points[a], &points[b]));
    if upward {
        candidates.reverse();
    }
    candidates
        .into_iter()
        .find(|&u| mutually_visible(cycle, points, v, u))
}
