use thiserror::Error;

use crate::math::Point2;

/// Top-level error type for the platecut library.
#[derive(Debug, Error)]
pub enum PlatecutError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Subtract(#[from] SubtractError),
}

/// Errors related to geometric primitives.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to mesh maintenance and construction.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("boundary chain starting at ({}, {}) does not close", start.x, start.y)]
    OpenBoundary { start: Point2 },

    #[error("triangulation failed: {0}")]
    Triangulation(String),
}

/// Fatal configuration errors raised by the subtraction engine.
#[derive(Debug, Error)]
pub enum SubtractError {
    #[error("unrecognized situation code {code:03}")]
    UnrecognizedSituation { code: u16 },

    #[error("inconsistent triangle encounter: {0}")]
    InconsistentEncounter(String),
}

/// Convenience type alias for results using [`PlatecutError`].
pub type Result<T> = std::result::Result<T, PlatecutError>;
