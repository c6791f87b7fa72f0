//! Error types for recovery operations.

use thiserror::Error;

/// Result type alias using the crate Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during stress recovery and probing.
///
/// Data-integrity errors abort the whole extraction; no partial field is
/// ever produced. Probe precondition failures are rejected before any
/// sampling work begins. A probe point falling outside the mesh is not an
/// error (it becomes a missing-value sentinel in the output).
#[derive(Error, Debug)]
pub enum Error {
    /// Mesh construction validation errors.
    #[error("mesh error: {0}")]
    Mesh(String),

    /// A quadrature sample references an element id not present in the mesh.
    #[error("quadrature sample references unknown element {element}")]
    UnknownElement { element: usize },

    /// An element's connectivity references a node id not present in the mesh.
    #[error("element {element} references missing node {node}")]
    MissingNode { element: usize, node: usize },

    /// The per-element quadrature sample count does not match the topology.
    #[error("element {element}: expected {expected} quadrature samples, got {got}")]
    QuadratureCount {
        element: usize,
        expected: usize,
        got: usize,
    },

    /// An external cell-type tag with no matching operator.
    #[error("unsupported cell type {0}")]
    UnsupportedCellType(u8),

    /// The quadrature source collaborator failed to deliver samples.
    #[error("quadrature source error: {0}")]
    Source(String),

    /// Probe resolution below the minimum of 3 intervals.
    #[error("probe requires at least 3 intervals, got {0}")]
    ProbeResolution(usize),

    /// Probe start and end points coincide.
    #[error("degenerate probe segment: start and end points coincide")]
    DegenerateSegment,
}
