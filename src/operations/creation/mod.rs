mod random_polygon;

pub use random_polygon::{RandomPolygon, DEFAULT_EXTENT};
