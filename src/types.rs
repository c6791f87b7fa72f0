//! Core data types for stress recovery.
//!
//! This module defines the types shared across the recovery pipeline:
//! - Geometric primitives (points)
//! - The fixed set of normal stress components
//! - Quadrature-point stress samples as delivered by the solver

use nalgebra::Vector3;

/// A point in 3D space.
pub type Point3 = Vector3<f64>;

/// Symmetric normal stress components recovered by the pipeline.
///
/// The component is threaded explicitly through every recovery and probe
/// call; there is no process-wide "active field" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StressComponent {
    /// Normal stress in the x direction.
    S11,
    /// Normal stress in the y direction.
    S22,
    /// Normal stress in the z direction (longitudinal for contour cuts).
    S33,
}

impl StressComponent {
    /// All components, in solver output order.
    pub const ALL: [StressComponent; 3] =
        [StressComponent::S11, StressComponent::S22, StressComponent::S33];

    /// Solver-facing field name.
    pub fn label(self) -> &'static str {
        match self {
            StressComponent::S11 => "S11",
            StressComponent::S22 => "S22",
            StressComponent::S33 => "S33",
        }
    }
}

/// One quadrature-point stress value for a single component.
///
/// Samples arrive ordered per element exactly as the solver wrote them;
/// the position within an element's run encodes the quadrature-point
/// numbering convention of the topology.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureSample {
    /// Element id (1-based).
    pub element: usize,
    /// Local quadrature-point index within the element.
    pub point: usize,
    /// Stress value at the quadrature point.
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_labels() {
        assert_eq!(StressComponent::S11.label(), "S11");
        assert_eq!(StressComponent::S22.label(), "S22");
        assert_eq!(StressComponent::S33.label(), "S33");
    }

    #[test]
    fn test_component_all_order() {
        let labels: Vec<&str> = StressComponent::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["S11", "S22", "S33"]);
    }
}
