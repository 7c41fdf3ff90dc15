use thiserror::Error;

/// Top-level error type for the Plica fold-rigging kernel.
#[derive(Debug, Error)]
pub enum PlicaError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Rig(#[from] RigError),
}

/// Errors raised while resolving the current mesh selection to a fold edge.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error(
        "must select 2 vertices or one or more edges \
         (found {vertices} vertices, {edges} edges)"
    )]
    Unresolvable { vertices: usize, edges: usize },

    #[error("boundary edges resolve to {0} bounding-box corners, expected 2")]
    AmbiguousCorners(usize),

    #[error("selected edge references unknown vertex {0}")]
    UnknownVertex(usize),
}

/// Errors related to fold-plane and partitioning computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("fold edge has zero length")]
    ZeroLengthFoldEdge,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors reported by the host rig while mutating bones and constraints.
#[derive(Debug, Error)]
pub enum RigError {
    #[error("bone not found: {0}")]
    BoneNotFound(String),

    #[error("bone already exists: {0}")]
    DuplicateBone(String),

    #[error("rig operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`PlicaError`].
pub type Result<T> = std::result::Result<T, PlicaError>;
