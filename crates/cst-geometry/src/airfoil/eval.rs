use cst_core::traits::Validate;
use cst_core::Result;
use cst_math::{bernstein_basis, bernstein_sum, dvec2, Aabb2, Point2, Sampling};
use serde::Serialize;

use super::params::{AirfoilParams, Side};
use super::terms::{class_function, leading_edge_term, trailing_edge_offset};

/// Sampled upper and lower surfaces, index-aligned by a shared `psi`.
///
/// Only produced by [`evaluate`]; both sequences are non-empty and have the
/// same length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurvePair {
    upper: Vec<Point2>,
    lower: Vec<Point2>,
}

impl CurvePair {
    pub fn upper(&self) -> &[Point2] {
        &self.upper
    }

    pub fn lower(&self) -> &[Point2] {
        &self.lower
    }

    pub fn surface(&self, side: Side) -> &[Point2] {
        match side {
            Side::Upper => &self.upper,
            Side::Lower => &self.lower,
        }
    }

    /// Number of samples per surface.
    pub fn len(&self) -> usize {
        self.upper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upper.is_empty()
    }

    /// Vertical distance between the last upper and last lower samples.
    pub fn trailing_edge_gap(&self) -> f64 {
        match (self.upper.last(), self.lower.last()) {
            (Some(u), Some(l)) => u.y - l.y,
            _ => 0.0,
        }
    }

    /// Bounding box of both surfaces.
    pub fn bounds(&self) -> Option<Aabb2> {
        let upper = Aabb2::from_points(&self.upper)?;
        let lower = Aabb2::from_points(&self.lower)?;
        Some(upper.merge(&lower))
    }
}

/// `C(psi) * S(psi) + LE(psi) ± psi * te / 2` for one surface, given its
/// shape-function value. The leading-edge term has the same sign on both
/// surfaces.
fn assemble(params: &AirfoilParams, side: Side, psi: f64, shape: f64) -> f64 {
    class_function(psi) * shape
        + leading_edge_term(params.le_weight, psi, params.weight_count)
        + trailing_edge_offset(params.te_thickness, psi, side.te_sign())
}

/// Both ordinates at `psi`, sharing one Bernstein basis.
///
/// `params` must already be validated.
fn ordinates_unchecked(params: &AirfoilParams, psi: f64) -> (f64, f64) {
    debug_assert_eq!(params.upper.len(), params.weight_count);
    debug_assert_eq!(params.lower.len(), params.weight_count);

    let basis = bernstein_basis(params.order() as u32, psi);
    let shape = |weights: &[f64]| -> f64 {
        basis.iter().zip(weights).map(|(b, w)| w * b).sum()
    };
    (
        assemble(params, Side::Upper, psi, shape(&params.upper)),
        assemble(params, Side::Lower, psi, shape(&params.lower)),
    )
}

/// One surface's ordinate at `psi`. `params` must already be validated.
pub(crate) fn ordinate_unchecked(params: &AirfoilParams, side: Side, psi: f64) -> f64 {
    assemble(params, side, psi, bernstein_sum(params.weights(side), psi))
}

/// Upper and lower surface ordinates at chordwise parameter `psi`.
///
/// Validates `params` first, so weight vectors that disagree with
/// `weight_count` are reported instead of being evaluated short.
pub fn ordinates_at(params: &AirfoilParams, psi: f64) -> Result<(f64, f64)> {
    params.validate()?;
    Ok(ordinates_unchecked(params, psi))
}

/// Evaluate both airfoil surfaces on a cosine-spaced grid.
///
/// Pure and deterministic: identical inputs give bit-identical output.
/// Returns [`cst_core::CstError::LengthMismatch`] (or a weight-count error)
/// instead of evaluating inconsistent parameters. Non-finite parameter
/// values are not rejected and propagate into the samples.
///
/// # Returns
/// A [`CurvePair`] with `sampling.num_points + 1` samples per surface.
pub fn evaluate(params: &AirfoilParams, sampling: &Sampling) -> Result<CurvePair> {
    params.validate()?;

    let psis = sampling.parameters();
    let mut upper = Vec::with_capacity(psis.len());
    let mut lower = Vec::with_capacity(psis.len());

    for psi in psis {
        let (yu, yl) = ordinates_unchecked(params, psi);
        upper.push(dvec2(psi, yu));
        lower.push(dvec2(psi, yl));
    }

    Ok(CurvePair { upper, lower })
}
