//! 10-node tetrahedron (C3D10) extrapolation operator.
//!
//! The element has 10 nodes but only 4 quadrature points, so direct
//! evaluation of the shape functions cannot produce one estimate per node.
//! Instead a patch-style basis matrix is used: each quadrature point
//! contributes a row of the bilinear monomials
//!
//! ```text
//! P[q] = [1, a, b, c, d, ab, ac, ad, bc, bd, cd]
//! ```
//!
//! evaluated at that point's barycentric coordinates (a, b, c, d). Node
//! estimates are `Pᵀ · s`, with the first 10 of the 11 components assigned
//! to the element's nodes in canonical order.
//!
//! The basis matrix is applied directly, without solving the least-squares
//! system `(PᵀP) a = Pᵀσ` of the textbook patch-recovery method. Downstream
//! results depend on this exact product, so the direct application must be
//! kept as-is.
//!
//! # Quadrature rule
//!
//! The standard symmetric 4-point rule: rows are the permutations of
//! (α, β, β, β) with α = (5+3√5)/20 and β = (5−√5)/20.

use nalgebra::{SMatrix, SVector};

use crate::element::NodalExtrapolator;

type BasisMatrix = SMatrix<f64, 4, 11>;
type Vector4 = SVector<f64, 4>;

/// Extrapolation operator for the 10-node quadratic tetrahedron.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tet10Extrapolator;

impl Tet10Extrapolator {
    /// Quadrature-point barycentric coordinates in solver output order.
    fn quadrature_points() -> [[f64; 4]; 4] {
        let sqrt5 = 5.0_f64.sqrt();
        let alpha = (5.0 + 3.0 * sqrt5) / 20.0;
        let beta = (5.0 - sqrt5) / 20.0;
        [
            [alpha, beta, beta, beta],
            [beta, alpha, beta, beta],
            [beta, beta, alpha, beta],
            [beta, beta, beta, alpha],
        ]
    }

    /// The 4×11 basis matrix of bilinear monomials per quadrature point.
    pub(crate) fn basis_matrix() -> BasisMatrix {
        let points = Self::quadrature_points();
        let mut p = BasisMatrix::zeros();
        for (q, &[a, b, c, d]) in points.iter().enumerate() {
            p[(q, 0)] = 1.0;
            p[(q, 1)] = a;
            p[(q, 2)] = b;
            p[(q, 3)] = c;
            p[(q, 4)] = d;
            p[(q, 5)] = a * b;
            p[(q, 6)] = a * c;
            p[(q, 7)] = a * d;
            p[(q, 8)] = b * c;
            p[(q, 9)] = b * d;
            p[(q, 10)] = c * d;
        }
        p
    }
}

impl NodalExtrapolator for Tet10Extrapolator {
    fn n_nodes(&self) -> usize {
        10
    }

    fn n_quadrature_points(&self) -> usize {
        4
    }

    fn extrapolate(&self, quadrature_values: &[f64]) -> Vec<f64> {
        assert_eq!(
            quadrature_values.len(),
            4,
            "Tet10 requires exactly 4 quadrature values"
        );

        let s = Vector4::from_row_slice(quadrature_values);
        let nodal = Self::basis_matrix().transpose() * s;
        nodal.iter().take(10).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_barycentric_rows_sum_to_one() {
        for point in Tet10Extrapolator::quadrature_points() {
            let sum: f64 = point.iter().sum();
            assert_relative_eq!(sum, 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_always_ten_estimates() {
        let op = Tet10Extrapolator;
        let nodal = op.extrapolate(&[0.0, 0.0, 0.0, 0.0]);
        assert_eq!(nodal.len(), 10);
        let nodal = op.extrapolate(&[1.0, -2.0, 3.0, -4.0]);
        assert_eq!(nodal.len(), 10);
    }

    #[test]
    fn test_golden_values() {
        // Regression anchor: the direct basis-matrix product for these
        // inputs reduces to closed forms in √5.
        let sqrt5 = 5.0_f64.sqrt();
        let op = Tet10Extrapolator;
        let nodal = op.extrapolate(&[10.0, 20.0, 30.0, 40.0]);

        let expected = [
            100.0,
            25.0 - 3.0 * sqrt5,
            25.0 - sqrt5,
            25.0 + sqrt5,
            25.0 + 3.0 * sqrt5,
            6.0 - sqrt5,
            (11.0 - sqrt5) / 2.0,
            5.0,
            5.0,
            (9.0 + sqrt5) / 2.0,
        ];
        for (got, want) in nodal.iter().zip(expected.iter()) {
            assert_relative_eq!(*got, *want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_constant_input_mapping() {
        // With all quadrature values equal to v, component k of Pᵀ·s is
        // v * (column-k sum of P): 4v for the constant monomial, v for the
        // linear monomials, and v*(2αβ + 2β²) for the bilinear ones.
        let sqrt5 = 5.0_f64.sqrt();
        let alpha = (5.0 + 3.0 * sqrt5) / 20.0;
        let beta = (5.0 - sqrt5) / 20.0;
        let bilinear = 2.0 * alpha * beta + 2.0 * beta * beta;

        let op = Tet10Extrapolator;
        let v = 7.0;
        let nodal = op.extrapolate(&[v; 4]);

        assert_relative_eq!(nodal[0], 4.0 * v, epsilon = 1e-12);
        for value in &nodal[1..5] {
            assert_relative_eq!(*value, v, epsilon = 1e-12);
        }
        for value in &nodal[5..10] {
            assert_relative_eq!(*value, v * bilinear, epsilon = 1e-12);
        }
    }

    #[test]
    #[should_panic(expected = "exactly 4 quadrature values")]
    fn test_wrong_count_panics() {
        Tet10Extrapolator.extrapolate(&[1.0, 2.0, 3.0]);
    }
}
