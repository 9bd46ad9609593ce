mod coverage;
mod validate;

pub use coverage::GuardCoverage;
pub use validate::{PolygonOrientation, ValidatePolygon};
