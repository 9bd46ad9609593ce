use rand::seq::index::sample;
use rand::Rng;

use crate::error::{OperationError, Result};
use crate::math::polygon_2d::{centroid, is_simple, signed_area_2d};
use crate::math::{Point2, TOLERANCE};

/// Side length of the sampling square used by the interactive tools.
pub const DEFAULT_EXTENT: u32 = 400;

const MAX_ATTEMPTS: usize = 100;

/// Generates a random star-shaped simple polygon.
///
/// Draws `n` integer points in `[0, extent]²` with pairwise distinct x and
/// pairwise distinct y coordinates, then orders them counter-clockwise by
/// angle around their centroid. Draws that put two points on one ray from
/// the centroid, or that fail the simplicity check, are discarded.
pub struct RandomPolygon {
    n: usize,
    extent: u32,
}

impl RandomPolygon {
    /// Creates a new `RandomPolygon` operation.
    #[must_use]
    pub fn new(n: usize, extent: u32) -> Self {
        Self { n, extent }
    }

    /// Executes the generation using `rng`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `n < 3` or the extent has
    /// fewer than `n` distinct coordinates, and `OperationError::Failed` if
    /// no valid polygon was drawn within the attempt limit.
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Point2>> {
        let slots = self.extent as usize + 1;
        if self.n < 3 || self.n > slots {
            return Err(OperationError::InvalidInput(format!(
                "cannot place {} vertices on a grid of extent {}",
                self.n, self.extent
            ))
            .into());
        }

        for attempt in 1..=MAX_ATTEMPTS {
            let xs = sample(rng, slots, self.n).into_vec();
            let ys = sample(rng, slots, self.n).into_vec();
            #[allow(clippy::cast_precision_loss)]
            let points: Vec<Point2> = xs
                .into_iter()
                .zip(ys)
                .map(|(x, y)| Point2::new(x as f64, y as f64))
                .collect();
            if let Some(polygon) = star_order(&points) {
                tracing::trace!(n = self.n, attempt, "random polygon generated");
                return Ok(polygon);
            }
        }
        Err(OperationError::Failed(format!(
            "no simple polygon with {} vertices after {MAX_ATTEMPTS} attempts",
            self.n
        ))
        .into())
    }
}

/// Sorts `points` by angle around their centroid, or `None` if the result
/// is not a valid counter-clockwise simple polygon.
fn star_order(points: &[Point2]) -> Option<Vec<Point2>> {
    let c = centroid(points);
    let mut keyed: Vec<(f64, Point2)> = points
        .iter()
        .map(|p| ((p.y - c.y).atan2(p.x - c.x), *p))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    if keyed.windows(2).any(|w| (w[1].0 - w[0].0).abs() < TOLERANCE) {
        return None;
    }
    let polygon: Vec<Point2> = keyed.into_iter().map(|(_, p)| p).collect();
    (signed_area_2d(&polygon) > TOLERANCE && is_simple(&polygon)).then_some(polygon)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::error::GalleryError;

    #[test]
    fn produces_valid_polygons() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in [3, 5, 10, 25] {
            let polygon = RandomPolygon::new(n, DEFAULT_EXTENT).execute(&mut rng).unwrap();
            assert_eq!(polygon.len(), n);
            assert!(signed_area_2d(&polygon) > 0.0);
            assert!(is_simple(&polygon));
            for (i, p) in polygon.iter().enumerate() {
                for q in &polygon[i + 1..] {
                    assert!((p.x - q.x).abs() > 0.5);
                    assert!((p.y - q.y).abs() > 0.5);
                }
            }
        }
    }

    #[test]
    fn same_seed_same_polygon() {
        let a = RandomPolygon::new(12, 100)
            .execute(&mut StdRng::seed_from_u64(99))
            .unwrap();
        let b = RandomPolygon::new(12, 100)
            .execute(&mut StdRng::seed_from_u64(99))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_impossible_requests() {
        let mut rng = StdRng::seed_from_u64(1);
        for (n, extent) in [(2, 10), (12, 10)] {
            assert!(matches!(
                RandomPolygon::new(n, extent).execute(&mut rng),
                Err(GalleryError::Operation(OperationError::InvalidInput(_)))
            ));
        }
    }
}
