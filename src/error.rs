use thiserror::Error;

/// Top-level error type for the art gallery pipeline.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to the half-edge topology.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("invalid polygon: {0}")]
    InvalidPolygon(String),

    #[error("invalid diagonal ({from}, {to}): {reason}")]
    InvalidDiagonal {
        from: usize,
        to: usize,
        reason: &'static str,
    },

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors raised by pipeline stages.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no visible supporting vertex for cusp vertex {vertex}")]
    UnresolvedCusp { vertex: usize },

    #[error("degenerate triangulation: {0}")]
    DegenerateTriangulation(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`GalleryError`].
pub type Result<T> = std::result::Result<T, GalleryError>;
