//! Class-Shape-Transformation airfoil model and evaluator.

mod eval;
mod params;
pub mod terms;

pub use eval::{evaluate, ordinates_at, CurvePair};
pub use params::{
    check_weight_count, AirfoilParams, Side, LE_WEIGHT_GUIDE, LOWER_WEIGHT_GUIDE,
    MAX_WEIGHT_COUNT, MIN_WEIGHT_COUNT, TE_THICKNESS_GUIDE, UPPER_WEIGHT_GUIDE,
};

pub(crate) use eval::ordinate_unchecked;
