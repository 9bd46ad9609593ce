mod ear_clip;
mod monotone;

use crate::error::{OperationError, Result};
use crate::math::predicates::cross;
use crate::math::{Point2, TOLERANCE};
use crate::topology::{FaceId, TopologyStore};

use super::Diagonal;

/// What to do with a face the monotone sweep leaves non-triangular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriangulationFallback {
    /// Fail with `OperationError::DegenerateTriangulation`.
    #[default]
    Abort,
    /// Ear-clip the leftover face. Ears taken without passing the ear test
    /// are counted; more than `max_forced_ears` in total is an error.
    EarClipping { max_forced_ears: usize },
}

/// How one monotone face was triangulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangulationPath {
    /// The face was already a triangle.
    AlreadyTriangle,
    /// The stack sweep alone finished the face.
    Monotone,
    /// Some part of the face needed the ear-clipping fallback.
    EarClipping { forced_ears: usize },
}

/// Per-face entry of a [`TriangulationReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceReport {
    /// The face's vertex cycle before triangulation.
    pub cycle: Vec<usize>,
    pub path: TriangulationPath,
}

/// Outcome of [`TriangulateMonotone::execute`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriangulationReport {
    /// Committed diagonals, in insertion order.
    pub diagonals: Vec<Diagonal>,
    pub faces: Vec<FaceReport>,
    /// Total forced ears across all faces.
    pub forced_ears: usize,
}

impl TriangulationReport {
    /// Number of faces that went through the fallback.
    #[must_use]
    pub fn fallback_faces(&self) -> usize {
        self.faces
            .iter()
            .filter(|f| matches!(f.path, TriangulationPath::EarClipping { .. }))
            .count()
    }
}

/// Triangulates every y-monotone face of a partitioned store.
///
/// Each face is scanned top to bottom with the chain stack algorithm, and
/// the collected diagonals are committed once the scan is done.
#[derive(Debug, Default)]
pub struct TriangulateMonotone {
    fallback: TriangulationFallback,
}

impl TriangulateMonotone {
    /// Creates a new `TriangulateMonotone` operation.
    #[must_use]
    pub fn new(fallback: TriangulationFallback) -> Self {
        Self { fallback }
    }

    /// Executes the triangulation in place.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::DegenerateTriangulation` if a face stays
    /// non-triangular under `Abort`, if the forced-ear limit is exceeded, or
    /// if some resulting triangle is flat or wound clockwise.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<TriangulationReport> {
        let points = store.points();
        let mut report = TriangulationReport::default();

        for face in store.face_ids() {
            let cycle = store.face_vertices(face)?;
            if cycle.len() == 3 {
                report.faces.push(FaceReport {
                    cycle,
                    path: TriangulationPath::AlreadyTriangle,
                });
                continue;
            }

            let mut pieces = vec![face];
            self.commit(
                store,
                &mut pieces,
                monotone::monotone_diagonals(&cycle, &points),
                &mut report.diagonals,
            )?;

            let mut leftover = Vec::new();
            for &piece in &pieces {
                let piece_cycle = store.face_vertices(piece)?;
                if piece_cycle.len() > 3 {
                    leftover.push(piece_cycle);
                }
            }

            let path = if leftover.is_empty() {
                TriangulationPath::Monotone
            } else {
                let forced = self.clip_leftovers(store, &points, &leftover, &mut report)?;
                TriangulationPath::EarClipping {
                    forced_ears: forced,
                }
            };
            report.faces.push(FaceReport { cycle, path });
        }

        check_areas(store, &points)?;
        tracing::debug!(
            diagonals = report.diagonals.len(),
            triangles = store.face_count(),
            fallback_faces = report.fallback_faces(),
            forced_ears = report.forced_ears,
            "triangulation complete"
        );
        Ok(report)
    }

    /// Inserts `diagonals` into the pieces of one face, stopping at the first
    /// rejected one when a fallback is configured.
    fn commit(
        &self,
        store: &mut TopologyStore,
        pieces: &mut Vec<FaceId>,
        diagonals: Vec<Diagonal>,
        committed: &mut Vec<Diagonal>,
    ) -> Result<()> {
        for d in diagonals {
            match store.add_diagonal(d.from, d.to) {
                Ok((first, second)) => {
                    pieces.retain(|&f| store.face(f).is_ok());
                    pieces.push(first);
                    pieces.push(second);
                    committed.push(d);
                }
                Err(err) => {
                    if self.fallback == TriangulationFallback::Abort {
                        return Err(
                            OperationError::DegenerateTriangulation(err.to_string()).into()
                        );
                    }
                    tracing::warn!(%err, "sweep diagonal rejected, falling back");
                    return Ok(());
                }
            }
        }
        Ok(())
    }

    /// Ear-clips each leftover cycle, returning the forced-ear count.
    fn clip_leftovers(
        &self,
        store: &mut TopologyStore,
        points: &[Point2],
        leftover: &[Vec<usize>],
        report: &mut TriangulationReport,
    ) -> Result<usize> {
        let TriangulationFallback::EarClipping { max_forced_ears } = self.fallback else {
            return Err(OperationError::DegenerateTriangulation(format!(
                "face {:?} is not a triangle after the monotone sweep",
                leftover[0]
            ))
            .into());
        };

        let mut forced = 0;
        for cycle in leftover {
            tracing::warn!(?cycle, "ear-clipping leftover face");
            let clipped = ear_clip::ear_clip(cycle, points);
            forced += clipped.forced;
            report.forced_ears += clipped.forced;
            if report.forced_ears > max_forced_ears {
                return Err(OperationError::DegenerateTriangulation(format!(
                    "{} forced ears exceed the limit of {max_forced_ears}",
                    report.forced_ears
                ))
                .into());
            }
            for d in clipped.diagonals {
                store
                    .add_diagonal(d.from, d.to)
                    .map_err(|err| OperationError::DegenerateTriangulation(err.to_string()))?;
                report.diagonals.push(d);
            }
        }
        Ok(forced)
    }
}

/// Rejects triangles that are flat or wound clockwise.
fn check_areas(store: &TopologyStore, points: &[Point2]) -> Result<()> {
    for (_, triangle) in store.triangles()? {
        let [a, b, c] = triangle.corners(points);
        let doubled_area = cross(&a, &b, &c);
        if doubled_area <= TOLERANCE {
            return Err(OperationError::DegenerateTriangulation(format!(
                "triangle {:?} is flat or inverted (signed area {})",
                triangle.vertices(),
                doubled_area / 2.0
            ))
            .into());
        }
    }
    Ok(())
}
