//! Sampling utilities for converting curves to point sequences.

use cst_math::Point2;

use crate::airfoil::CurvePair;
use crate::curve::Curve2;

/// Sample a curve at normalized parameters.
///
/// Each `u` in `params` is mapped linearly from `[0, 1]` onto the curve's
/// domain, so any distribution from `cst_math::spacing` can be reused.
///
/// # Arguments
/// * `curve` - The curve to sample
/// * `params` - Normalized parameters, typically ascending in `[0, 1]`
pub fn sample_curve(curve: &dyn Curve2, params: &[f64]) -> Vec<Point2> {
    let (t_min, t_max) = curve.domain();
    params
        .iter()
        .map(|&u| curve.point_at(t_min + (t_max - t_min) * u))
        .collect()
}

/// Closed airfoil contour: upper surface from leading to trailing edge, then
/// the lower surface back from trailing to leading edge.
///
/// Every sample of both surfaces is kept, so the contour has `2 * pair.len()`
/// points and ends on the lower leading-edge sample, which coincides with
/// the first point.
pub fn closed_outline(pair: &CurvePair) -> Vec<Point2> {
    let mut points = Vec::with_capacity(pair.upper().len() + pair.lower().len());
    points.extend_from_slice(pair.upper());
    points.extend(pair.lower().iter().rev());
    points
}
