//! CST airfoil geometry: parameters, class-shape evaluation, and surface curves.

pub mod airfoil;
pub mod curve;
pub mod tessellate;

pub use airfoil::{evaluate, AirfoilParams, CurvePair, Side};
pub use curve::{CstSurface, Curve2};
