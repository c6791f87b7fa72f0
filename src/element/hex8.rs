//! 8-node hexahedron (C3D8) extrapolation operator.
//!
//! The element is a full-integration brick: 8 nodes, 8 quadrature points at
//! (±1/√3, ±1/√3, ±1/√3). Node estimates are obtained by evaluating the
//! trilinear shape functions at the quadrature-point natural coordinates
//! and applying the resulting 8×8 matrix to the quadrature stress vector,
//! row i of the product being assigned to node i. This is an
//! extrapolation-by-evaluation scheme, not a least-squares inversion.
//!
//! # Shape Functions
//!
//! ```text
//! N_i = (1 + ξ_i*ξ)(1 + η_i*η)(1 + ζ_i*ζ) / 8
//! ```
//! where (ξ_i, η_i, ζ_i) are ±1 for node i.
//!
//! # Orderings
//!
//! Nodes follow the standard brick numbering (bottom face 0-3 counter-
//! clockwise, then top face 4-7). Quadrature points follow the solver's
//! output order: ζ varies fastest, then η, then ξ.

use nalgebra::{SMatrix, SVector};

use crate::element::NodalExtrapolator;

/// Natural coordinates for each of the 8 nodes.
/// Node i has natural coordinates (XI[i], ETA[i], ZETA[i]).
const XI: [f64; 8] = [-1.0, 1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0];
const ETA: [f64; 8] = [-1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 1.0, 1.0];
const ZETA: [f64; 8] = [-1.0, -1.0, -1.0, -1.0, 1.0, 1.0, 1.0, 1.0];

type Matrix8 = SMatrix<f64, 8, 8>;
type Vector8 = SVector<f64, 8>;

/// Extrapolation operator for the 8-node full-integration hexahedron.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hex8Extrapolator;

impl Hex8Extrapolator {
    /// Quadrature-point natural coordinates in solver output order.
    fn quadrature_points() -> [[f64; 3]; 8] {
        let g = 1.0 / 3.0_f64.sqrt();
        let mut points = [[0.0; 3]; 8];
        let mut q = 0;
        for &xi in &[-g, g] {
            for &eta in &[-g, g] {
                for &zeta in &[-g, g] {
                    points[q] = [xi, eta, zeta];
                    q += 1;
                }
            }
        }
        points
    }

    /// The 8×8 evaluation matrix: entry (q, n) is shape function N_n
    /// evaluated at quadrature point q.
    ///
    /// Each row is a convex combination (the shape functions sum to 1 at
    /// any point), so a constant quadrature vector recovers the same
    /// constant at every node.
    pub(crate) fn evaluation_matrix() -> Matrix8 {
        let points = Self::quadrature_points();
        let mut m = Matrix8::zeros();
        for (q, &[xi, eta, zeta]) in points.iter().enumerate() {
            for n in 0..8 {
                m[(q, n)] =
                    0.125 * (1.0 + XI[n] * xi) * (1.0 + ETA[n] * eta) * (1.0 + ZETA[n] * zeta);
            }
        }
        m
    }
}

impl NodalExtrapolator for Hex8Extrapolator {
    fn n_nodes(&self) -> usize {
        8
    }

    fn n_quadrature_points(&self) -> usize {
        8
    }

    fn extrapolate(&self, quadrature_values: &[f64]) -> Vec<f64> {
        assert_eq!(
            quadrature_values.len(),
            8,
            "Hex8 requires exactly 8 quadrature values"
        );

        let s = Vector8::from_row_slice(quadrature_values);
        let nodal = Self::evaluation_matrix() * s;
        nodal.iter().copied().collect()
    }
}
