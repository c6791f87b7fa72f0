//! CREST - Contour REsidual STress recovery
//!
//! Post-processing core for contour-method finite element analyses:
//! - Extrapolation of quadrature-point stresses to mesh nodes for 8-node
//!   hexahedra and 10-node quadratic tetrahedra
//! - Multi-element nodal averaging into a per-node stress field
//! - Line probing of the recovered field for 1-D profiles
//!
//! # Architecture
//!
//! The pipeline is a map/reduce over elements:
//!
//! - [`NodalExtrapolator`] implementations hold the per-topology math
//! - [`recovery::recover`] maps each element's quadrature values to
//!   provisional node samples
//! - [`recovery::average`] reduces duplicate samples per node into a
//!   [`RecoveredField`]
//! - [`probe::probe_line`] samples a component of the recovered field
//!   along a segment through the mesh
//!
//! Mesh data, solver output and field interpolation come from external
//! providers through the [`Mesh`] structure and the [`QuadratureSource`]
//! and [`FieldSampler`] traits; this crate performs no I/O of its own.

pub mod element;
pub mod error;
pub mod mesh;
pub mod probe;
pub mod recovery;
pub mod types;

pub use element::{operator_for, Hex8Extrapolator, NodalExtrapolator, Tet10Extrapolator};
pub use error::{Error, Result};
pub use mesh::{Element, ElementType, Mesh, Node};
pub use probe::{probe_line, FieldSampler, LineProfile, ProbeOptions};
pub use recovery::{
    average, recover, recover_all, recover_field, FieldSet, NodalStress, NodeStressSample,
    QuadratureSource, RecoveredField,
};
pub use types::{Point3, QuadratureSample, StressComponent};
