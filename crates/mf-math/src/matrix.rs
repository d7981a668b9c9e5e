//! `Matrix` — a two-dimensional matrix of reals.
//!
//! A thin newtype around `nalgebra::DMatrix<f64>` (row-major access)
//! exposing exactly what the portfolio mathematics needs: construction,
//! indexing, inversion, and matrix-vector products.

use crate::array::Array;
use mf_core::Real;
use nalgebra::DMatrix;
use std::ops::{Index, IndexMut, Mul};

/// A dynamically-sized 2D matrix of `Real` values (row-major access).
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix(DMatrix<Real>);

impl Matrix {
    /// Create a zero-filled `rows × cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self(DMatrix::zeros(rows, cols))
    }

    /// Create from a row-major data slice.
    pub fn from_row_slice(rows: usize, cols: usize, data: &[Real]) -> Self {
        Self(DMatrix::from_row_slice(rows, cols, data))
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.0.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.0.ncols()
    }

    /// Return `true` if the matrix is square.
    pub fn is_square(&self) -> bool {
        self.0.nrows() == self.0.ncols()
    }

    /// Borrow the inner `DMatrix`.
    pub fn inner(&self) -> &DMatrix<Real> {
        &self.0
    }

    /// Transpose.
    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    /// Inverse (returns `None` if the matrix is singular or not square).
    pub fn try_inverse(&self) -> Option<Self> {
        self.0.clone().try_inverse().map(Self)
    }

    /// Matrix-vector product `M · v`.
    pub fn mul_vec(&self, v: &Array) -> Array {
        Array::from(&self.0 * v.inner())
    }

    /// Quadratic form `vᵀ · M · v`.
    pub fn quadratic_form(&self, v: &Array) -> Real {
        v.dot(&self.mul_vec(v))
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Real;

    fn index(&self, (r, c): (usize, usize)) -> &Real {
        &self.0[(r, c)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut Real {
        &mut self.0[(r, c)]
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        Matrix(&self.0 * &rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn inverse_of_identity_like() {
        let m = Matrix::from_row_slice(2, 2, &[2.0, 0.0, 0.0, 4.0]);
        let inv = m.try_inverse().unwrap();
        assert_abs_diff_eq!(inv[(0, 0)], 0.5);
        assert_abs_diff_eq!(inv[(1, 1)], 0.25);
    }

    #[test]
    fn singular_has_no_inverse() {
        let m = Matrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        assert!(m.try_inverse().is_none());
    }

    #[test]
    fn quadratic_form_matches_hand_computation() {
        let m = Matrix::from_row_slice(2, 2, &[1.0, 0.5, 0.5, 2.0]);
        let v = Array::from_slice(&[1.0, 2.0]);
        // 1 + 2·0.5·2 + 4·2 = 11
        assert_abs_diff_eq!(m.quadratic_form(&v), 11.0);
    }
}
