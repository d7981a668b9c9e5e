//! Minimum variance portfolios and the efficient frontier.
//!
//! Everything here works on a vector `m` of expected returns and a
//! covariance matrix `C`. The minimum variance line parameterizes the
//! frontier weights as `w(μ) = μ·a + b` for two fixed vectors `a` and
//! `b`, so sweeping the frontier costs one matrix inversion total.

use mf_core::{Error, Real, Result};
use mf_math::array::Array;
use mf_math::matrix::Matrix;

/// Builds the covariance matrix `C[i][j] = ρ[i][j]·σ_i·σ_j` from a
/// correlation matrix and per-security risks.
pub fn covariance_from_correlations(rho: &Matrix, sigma: &Array) -> Result<Matrix> {
    let n = sigma.size();
    if !rho.is_square() || rho.rows() != n {
        return Err(Error::InvalidArgument(format!(
            "correlation matrix must be {n}x{n} to match {n} risks, got {}x{}",
            rho.rows(),
            rho.cols()
        )));
    }
    let mut cov = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            cov[(i, j)] = rho[(i, j)] * sigma[i] * sigma[j];
        }
    }
    Ok(cov)
}

/// Expected return and risk `(μ_V, σ_V)` of the portfolio with
/// weights `w`.
pub fn portfolio_value(m: &Array, cov: &Matrix, w: &Array) -> Result<(Real, Real)> {
    check_dims(m, cov)?;
    if w.size() != m.size() {
        return Err(Error::InvalidArgument(format!(
            "expected {} weights, got {}",
            m.size(),
            w.size()
        )));
    }
    let mu = m.dot(w);
    let sigma = cov.quadratic_form(w).sqrt();
    Ok((mu, sigma))
}

/// Weights of the minimum variance portfolio `w = uC⁻¹ / (uC⁻¹uᵀ)`.
pub fn min_variance_portfolio(cov: &Matrix) -> Result<Array> {
    let cinv = invert(cov)?;
    let u = Array::from_element(cov.rows(), 1.0);
    let ucinv = cinv.mul_vec(&u);
    let denom = ucinv.sum();
    Ok(&ucinv * (1.0 / denom))
}

/// Vectors `(a, b)` of the minimum variance line, so that the
/// frontier portfolio with expected return `μ` has weights `μ·a + b`.
pub fn min_variance_line(m: &Array, cov: &Matrix) -> Result<(Array, Array)> {
    check_dims(m, cov)?;
    let cinv = invert(cov)?;
    let n = m.size();
    let u = Array::from_element(n, 1.0);
    let mcinv = cinv.mul_vec(m);
    let ucinv = cinv.mul_vec(&u);

    // 2x2 Gram matrix of m and u under the C⁻¹ inner product
    let gram = Matrix::from_row_slice(
        2,
        2,
        &[
            mcinv.dot(m),
            ucinv.dot(m),
            mcinv.dot(&u),
            ucinv.dot(&u),
        ],
    );
    let ginv = gram
        .try_inverse()
        .ok_or_else(|| Error::InvalidArgument("degenerate frontier: m and u collinear".into()))?;

    let mut a = Array::zeros(n);
    let mut b = Array::zeros(n);
    for k in 0..n {
        a[k] = ginv[(0, 0)] * mcinv[k] + ginv[(1, 0)] * ucinv[k];
        b[k] = ginv[(0, 1)] * mcinv[k] + ginv[(1, 1)] * ucinv[k];
    }
    Ok((a, b))
}

/// Frontier weights `w = μ·a + b` from precomputed line vectors.
pub fn min_variance_weights(a: &Array, b: &Array, mu: Real) -> Array {
    &(a * mu) + b
}

/// Weights and risk of the frontier portfolio with expected return
/// `mu`.
pub fn frontier_weights(m: &Array, cov: &Matrix, mu: Real) -> Result<(Array, Real)> {
    let (a, b) = min_variance_line(m, cov)?;
    let w = min_variance_weights(&a, &b, mu);
    let (_, sigma) = portfolio_value(m, cov, &w)?;
    Ok((w, sigma))
}

pub(crate) fn invert(cov: &Matrix) -> Result<Matrix> {
    if !cov.is_square() {
        return Err(Error::InvalidArgument(format!(
            "covariance matrix must be square, got {}x{}",
            cov.rows(),
            cov.cols()
        )));
    }
    cov.try_inverse()
        .ok_or_else(|| Error::InvalidArgument("covariance matrix is singular".into()))
}

pub(crate) fn check_dims(m: &Array, cov: &Matrix) -> Result<()> {
    if cov.rows() != m.size() || cov.cols() != m.size() {
        return Err(Error::InvalidArgument(format!(
            "covariance must be {n}x{n} for {n} securities, got {}x{}",
            cov.rows(),
            cov.cols(),
            n = m.size()
        )));
    }
    Ok(())
}
