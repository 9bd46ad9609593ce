use crate::error::Result;
use crate::math::polygon_2d::{ensure_ccw, signed_area_2d};
use crate::math::Point2;
use crate::topology::{Triangle, TopologyStore};

use super::coloring::{Coloring, ThreeColoring};
use super::dual::{BuildDualGraph, DualGraph, DualNode};
use super::guards::{GuardSet, GuardTieBreak, SelectGuards};
use super::partition::MonotonePartition;
use super::query::{GuardCoverage, PolygonOrientation, ValidatePolygon};
use super::triangulate::{TriangulateMonotone, TriangulationFallback, TriangulationReport};
use super::Diagonal;

/// Parameters for [`SolveGallery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryParams {
    /// Accept clockwise input by reversing it. Reported indices still refer
    /// to the caller's order.
    pub normalize_orientation: bool,
    /// Run the quadratic self-intersection check before building.
    pub validate_simple: bool,
    pub tie_break: GuardTieBreak,
    pub fallback: TriangulationFallback,
}

impl Default for GalleryParams {
    fn default() -> Self {
        Self {
            normalize_orientation: true,
            validate_simple: true,
            tie_break: GuardTieBreak::default(),
            fallback: TriangulationFallback::default(),
        }
    }
}

/// Summary counts of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryStats {
    pub num_vertices: usize,
    pub num_triangles: usize,
    pub num_guards: usize,
    /// The `⌊n/3⌋` upper bound on the guard count.
    pub guard_bound: usize,
    pub partition_diagonals: usize,
    pub triangulation_diagonals: usize,
}

/// Every artifact derived from one polygon.
///
/// All vertex indices refer to positions in `vertices`, the caller's input.
#[derive(Debug, Clone)]
pub struct GallerySolution {
    pub vertices: Vec<Point2>,
    /// `true` if the input was clockwise and was reversed internally.
    pub reversed: bool,
    pub partition_diagonals: Vec<Diagonal>,
    pub triangulation: TriangulationReport,
    pub triangles: Vec<Triangle>,
    pub dual: DualGraph,
    pub coloring: Coloring,
    pub guards: GuardSet,
    pub stats: GalleryStats,
}

impl GallerySolution {
    /// Positions of triangles without a guard corner. Empty for a valid run.
    #[must_use]
    pub fn uncovered_triangles(&self) -> Vec<usize> {
        GuardCoverage::new(&self.triangles, &self.guards.vertices).execute()
    }

    /// Guard positions.
    #[must_use]
    pub fn guard_points(&self) -> Vec<Point2> {
        self.guards.vertices.iter().map(|&v| self.vertices[v]).collect()
    }
}

/// Runs the whole guard placement pipeline on one polygon.
///
/// # Stages
///
/// 1. Validate and, if allowed, normalize the boundary to counter-clockwise.
/// 2. Build the half-edge store.
/// 3. Partition into y-monotone faces.
/// 4. Triangulate each monotone face.
/// 5. Build the dual graph and 3-color the vertices over it.
/// 6. Place guards on the smallest color class.
pub struct SolveGallery<'a> {
    points: &'a [Point2],
    params: GalleryParams,
}

impl<'a> SolveGallery<'a> {
    /// Creates a new `SolveGallery` operation.
    #[must_use]
    pub fn new(points: &'a [Point2], params: GalleryParams) -> Self {
        Self { points, params }
    }

    /// Executes the pipeline.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any stage: `InvalidPolygon` for bad
    /// input, `UnresolvedCusp` from partitioning, `DegenerateTriangulation`
    /// from triangulation, or `InvalidTopology` from the derived structures.
    pub fn execute(&self) -> Result<GallerySolution> {
        let n = self.points.len();
        let orientation = if self.params.validate_simple {
            ValidatePolygon::new(self.points).execute()?
        } else if signed_area_2d(self.points) < 0.0 {
            PolygonOrientation::Clockwise
        } else {
            PolygonOrientation::CounterClockwise
        };

        let (ccw, reversed) = if self.params.normalize_orientation {
            ensure_ccw(self.points)
        } else {
            (self.points.to_vec(), false)
        };
        tracing::debug!(n, ?orientation, reversed, "input accepted");
        let label = |v: usize| if reversed { n - 1 - v } else { v };

        let mut store = TopologyStore::from_polygon(&ccw)?;
        let partition_diagonals: Vec<Diagonal> = MonotonePartition::new()
            .execute(&mut store)?
            .into_iter()
            .map(|d| Diagonal::new(label(d.from), label(d.to)))
            .collect();

        let mut triangulation =
            TriangulateMonotone::new(self.params.fallback).execute(&mut store)?;
        if reversed {
            relabel_report(&mut triangulation, label);
        }

        let dual = BuildDualGraph::new().execute(&store)?;
        let dual = if reversed {
            relabel_dual(&dual, self.points, label)
        } else {
            dual
        };
        let triangles: Vec<Triangle> = dual.nodes().iter().map(|node| node.triangle).collect();

        let coloring = ThreeColoring::new(&dual).execute()?;
        let guards = SelectGuards::new(&coloring, self.params.tie_break).execute()?;

        let stats = GalleryStats {
            num_vertices: n,
            num_triangles: triangles.len(),
            num_guards: guards.len(),
            guard_bound: n / 3,
            partition_diagonals: partition_diagonals.len(),
            triangulation_diagonals: triangulation.diagonals.len(),
        };
        tracing::info!(
            vertices = stats.num_vertices,
            triangles = stats.num_triangles,
            guards = stats.num_guards,
            bound = stats.guard_bound,
            "gallery solved"
        );

        Ok(GallerySolution {
            vertices: self.points.to_vec(),
            reversed,
            partition_diagonals,
            triangulation,
            triangles,
            dual,
            coloring,
            guards,
            stats,
        })
    }
}

fn relabel_report(report: &mut TriangulationReport, label: impl Fn(usize) -> usize) {
    for d in &mut report.diagonals {
        *d = Diagonal::new(label(d.from), label(d.to));
    }
    for face in &mut report.faces {
        for v in &mut face.cycle {
            *v = label(*v);
        }
    }
}

/// Rewrites node triangles into the caller's vertex labels. Faces, edges and
/// centroids are unchanged.
fn relabel_dual(
    dual: &DualGraph,
    points: &[Point2],
    label: impl Fn(usize) -> usize,
) -> DualGraph {
    let nodes = dual
        .nodes()
        .iter()
        .map(|node| {
            let [a, b, c] = node.triangle.vertices().map(&label);
            DualNode::new(node.face, Triangle::new(a, b, c), points)
        })
        .collect();
    let mut relabeled = DualGraph::with_nodes(nodes);
    for (a, b) in dual.edges() {
        relabeled.add_edge(a, b);
    }
    relabeled
}
