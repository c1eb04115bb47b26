pub mod aabb;
pub mod bernstein;
pub mod binomial;
pub mod spacing;

pub use aabb::Aabb2;
pub use bernstein::{bernstein, bernstein_basis, bernstein_sum};
pub use binomial::binomial;
pub use glam::{dvec2, DVec2};
pub use spacing::{cosine_spacing, Sampling, DEFAULT_NUM_POINTS};

pub type Point2 = DVec2;
