//! Parametric curves in the airfoil plane.

mod surface;

use cst_math::Point2;

pub use surface::CstSurface;

/// Trait for parametric curves in 2D space.
pub trait Curve2: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point2;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);
}
