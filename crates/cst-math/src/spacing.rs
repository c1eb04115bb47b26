//! Parameter distributions for sampling curves.

use std::f64::consts::PI;

use cst_core::{CstError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_NUM_POINTS: usize = 400;

/// Cosine-spaced parameters on `[0, 1]`.
///
/// Returns `num_points + 1` values `0.5 * (1 - cos(i / num_points * PI))`,
/// clustered toward both ends. The first value is exactly 0 and the last
/// exactly 1.
pub fn cosine_spacing(num_points: usize) -> Vec<f64> {
    if num_points == 0 {
        return vec![0.0];
    }
    (0..=num_points)
        .map(|i| {
            let beta = (i as f64 / num_points as f64) * PI;
            0.5 * (1.0 - beta.cos())
        })
        .collect()
}

/// Sampling configuration for curve evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Sampling {
    /// Number of intervals; evaluation yields `num_points + 1` samples.
    pub num_points: usize,
}

impl Sampling {
    pub fn new(num_points: usize) -> Result<Self> {
        if num_points == 0 {
            return Err(CstError::InvalidSampling(
                "num_points must be at least 1".into(),
            ));
        }
        Ok(Self { num_points })
    }

    pub fn sample_count(&self) -> usize {
        self.num_points + 1
    }

    pub fn parameters(&self) -> Vec<f64> {
        cosine_spacing(self.num_points)
    }
}

impl Default for Sampling {
    fn default() -> Self {
        Self {
            num_points: DEFAULT_NUM_POINTS,
        }
    }
}
