//! CST airfoil engine facade.
//!
//! [`ParameterStore`] owns the current airfoil parameters, validates every
//! edit at the boundary, and hands out the sampled [`CurvePair`], recomputed
//! only when an input changed.
//!
//! # Example
//! ```
//! use cst_airfoil::{ParameterStore, Side};
//!
//! let mut store = ParameterStore::new();
//! store.set_weight(Side::Upper, 2, 0.45).unwrap();
//! assert!(store.reset_order(22).is_err());
//!
//! let curves = store.curves().unwrap();
//! assert_eq!(curves.len(), 401);
//! ```

pub mod cache;
pub mod defaults;
pub mod reset;
pub mod store;

pub use cache::CurveCache;
pub use cst_core::{CstError, Result};
pub use cst_geometry::{AirfoilParams, CurvePair, Side};
pub use cst_math::Sampling;
pub use store::ParameterStore;
