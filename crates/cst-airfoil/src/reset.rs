//! Order reset: regenerate both weight vectors from a generic teardrop.
//!
//! The profile is analytic and independent of whatever airfoil was loaded
//! before. For `t = i / (count - 1)`:
//!
//! - upper: `0.2 (1-t)^2 + 0.4 t (1-t)`
//! - lower: `-0.2 (1-t)^2 - 0.15 t (1-t)`
//!
//! Each value is rounded to 3 decimals and the last entry of both vectors is
//! forced to exactly 0. Products are grouped left to right (`(0.4 t) (1-t)`)
//! so the rounded weights match the reference profile digit for digit.

use cst_core::Result;
use cst_geometry::airfoil::check_weight_count;

/// Round to 3 decimals from the exact binary value, ties away from zero.
///
/// Scaling by 1000 first would round the scaled product instead, which turns
/// `-0.08749999..` into `-0.088`. A double lies exactly halfway between two
/// 3-decimal values only when it is an odd multiple of 1/16; `{:.3}` breaks
/// those ties to even, so they are nudged away from zero first.
fn round3(v: f64) -> f64 {
    let sixteenths = v * 16.0;
    let tie = sixteenths.fract() == 0.0 && sixteenths % 2.0 != 0.0;
    let v = if tie { v + 0.0001_f64.copysign(v) } else { v };
    format!("{:.3}", v).parse().unwrap_or(v)
}

/// Generic `(upper, lower)` weight vectors of length `count`.
///
/// Rejects counts outside `[MIN_WEIGHT_COUNT, MAX_WEIGHT_COUNT]`.
pub fn generic_weights(count: i64) -> Result<(Vec<f64>, Vec<f64>)> {
    let count = check_weight_count(count)?;
    let n = count - 1;

    let mut upper = Vec::with_capacity(count);
    let mut lower = Vec::with_capacity(count);
    for i in 0..=n {
        let t = i as f64 / n as f64;
        let s = 1.0 - t;
        upper.push(round3(0.2 * (s * s) + 0.4 * t * s));
        lower.push(round3(-0.2 * (s * s) - 0.15 * t * s));
    }
    upper[n] = 0.0;
    lower[n] = 0.0;

    Ok((upper, lower))
}
