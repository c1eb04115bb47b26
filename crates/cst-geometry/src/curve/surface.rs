//! One airfoil surface viewed as a parametric curve.

use cst_core::traits::Validate;
use cst_core::Result;
use cst_math::{dvec2, Point2};

use super::Curve2;
use crate::airfoil::{ordinate_unchecked, AirfoilParams, Side};

/// Upper or lower CST surface, parameterized by chordwise `psi` on `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct CstSurface<'a> {
    params: &'a AirfoilParams,
    side: Side,
}

impl<'a> CstSurface<'a> {
    pub fn new(params: &'a AirfoilParams, side: Side) -> Result<Self> {
        params.validate()?;
        Ok(Self { params, side })
    }

    pub fn side(&self) -> Side {
        self.side
    }
}

impl Curve2 for CstSurface<'_> {
    fn point_at(&self, t: f64) -> Point2 {
        // params were validated in `new`
        dvec2(t, ordinate_unchecked(self.params, self.side, t))
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}
