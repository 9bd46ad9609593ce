use crate::error::{GalleryError, Result, TopologyError};
use crate::math::polygon_2d::{find_duplicate, is_simple, signed_area_2d};
use crate::math::{Point2, TOLERANCE};

/// Winding of a valid polygon boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonOrientation {
    CounterClockwise,
    Clockwise,
}

/// Checks that a point sequence describes a usable simple polygon.
pub struct ValidatePolygon<'a> {
    points: &'a [Point2],
}

impl<'a> ValidatePolygon<'a> {
    /// Creates a new `ValidatePolygon` query.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Executes the validation, returning the boundary's orientation.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidPolygon` if there are fewer than 3
    /// points, two points coincide, the area is zero, or two boundary edges
    /// touch anywhere other than at their shared vertex.
    pub fn execute(&self) -> Result<PolygonOrientation> {
        let n = self.points.len();
        if n < 3 {
            return Err(invalid(format!("at least 3 vertices required, got {n}")));
        }
        if let Some((i, j)) = find_duplicate(self.points) {
            return Err(invalid(format!("vertices {i} and {j} coincide")));
        }
        let area = signed_area_2d(self.points);
        if area.abs() < TOLERANCE {
            return Err(invalid(format!("area {area:e} is below tolerance")));
        }
        if !is_simple(self.points) {
            return Err(invalid("boundary intersects itself".into()));
        }
        Ok(if area > 0.0 {
            PolygonOrientation::CounterClockwise
        } else {
            PolygonOrientation::Clockwise
        })
    }
}

fn invalid(msg: String) -> GalleryError {
    TopologyError::InvalidPolygon(msg).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    fn is_invalid(points: &[Point2]) -> bool {
        matches!(
            ValidatePolygon::new(points).execute(),
            Err(GalleryError::Topology(TopologyError::InvalidPolygon(_)))
        )
    }

    #[test]
    fn reports_orientation() {
        let ccw = pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        let cw: Vec<Point2> = ccw.iter().rev().copied().collect();
        assert_eq!(
            ValidatePolygon::new(&ccw).execute().ok(),
            Some(PolygonOrientation::CounterClockwise)
        );
        assert_eq!(
            ValidatePolygon::new(&cw).execute().ok(),
            Some(PolygonOrientation::Clockwise)
        );
    }

    #[test]
    fn rejects_degenerate_input() {
        assert!(is_invalid(&pts(&[(0.0, 0.0), (1.0, 0.0)])));
        assert!(is_invalid(&pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)])));
        assert!(is_invalid(&pts(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 0.0),
            (0.0, 1.0)
        ])));
    }

    #[test]
    fn tiny_area_is_reported_as_below_tolerance() {
        let square = pts(&[(0.0, 0.0), (1e-6, 0.0), (1e-6, 1e-6), (0.0, 1e-6)]);
        match ValidatePolygon::new(&square).execute() {
            Err(GalleryError::Topology(TopologyError::InvalidPolygon(msg))) => {
                assert!(msg.contains("below tolerance"));
            }
            other => panic!("expected InvalidPolygon, got {other:?}"),
        }
    }

    #[test]
    fn rejects_bowtie() {
        assert!(is_invalid(&pts(&[
            (0.0, 0.0),
            (3.0, 2.0),
            (3.0, 0.0),
            (0.0, 3.0)
        ])));
    }
}
