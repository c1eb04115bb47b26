//! Bernstein polynomial basis.

use crate::binomial::binomial;

/// Single Bernstein basis term `C(n, j) * t^j * (1 - t)^(n - j)`.
///
/// `t^0` is 1 even at `t = 0`, so the end terms are 1 at their endpoints.
pub fn bernstein(order: u32, j: u32, t: f64) -> f64 {
    if j > order {
        return 0.0;
    }
    binomial(order, j) as f64 * t.powi(j as i32) * (1.0 - t).powi((order - j) as i32)
}

/// All `order + 1` basis terms at parameter `t`.
pub fn bernstein_basis(order: u32, t: f64) -> Vec<f64> {
    (0..=order).map(|j| bernstein(order, j, t)).collect()
}

/// Evaluate the Bernstein polynomial whose coefficients are `coeffs`.
///
/// The order is `coeffs.len() - 1`; an empty slice evaluates to 0.
pub fn bernstein_sum(coeffs: &[f64], t: f64) -> f64 {
    let Some(order) = coeffs.len().checked_sub(1) else {
        return 0.0;
    };
    coeffs
        .iter()
        .enumerate()
        .map(|(j, &w)| w * bernstein(order as u32, j as u32, t))
        .sum()
}
