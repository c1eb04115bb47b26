//! Single-entry memo for the evaluated curve pair.

use std::sync::Arc;

use cst_core::traits::ContentKey;
use cst_core::{ParamKey, Result};
use cst_geometry::{evaluate, AirfoilParams, CurvePair};
use cst_math::Sampling;
use log::trace;

/// Remembers the last evaluated [`CurvePair`] and the key of its inputs.
///
/// Cached pairs are shared as `Arc` and never modified; a changed input
/// produces a fresh pair.
#[derive(Debug, Default)]
pub struct CurveCache {
    entry: Option<(ParamKey, Arc<CurvePair>)>,
}

impl CurveCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key covering every evaluation input, sampling included.
    pub fn key_for(params: &AirfoilParams, sampling: &Sampling) -> ParamKey {
        ParamKey::builder()
            .key(params.content_key())
            .count(sampling.num_points)
            .finish()
    }

    pub fn is_fresh(&self, params: &AirfoilParams, sampling: &Sampling) -> bool {
        matches!(&self.entry, Some((key, _)) if *key == Self::key_for(params, sampling))
    }

    pub fn get_or_compute(
        &mut self,
        params: &AirfoilParams,
        sampling: &Sampling,
    ) -> Result<Arc<CurvePair>> {
        let key = Self::key_for(params, sampling);
        if let Some((cached, pair)) = &self.entry {
            if *cached == key {
                trace!("curve cache hit {}", key);
                return Ok(Arc::clone(pair));
            }
        }

        trace!(
            "curve cache miss {}: evaluating {} weights at {} samples",
            key,
            params.weight_count,
            sampling.sample_count()
        );
        let pair = Arc::new(evaluate(params, sampling)?);
        self.entry = Some((key, Arc::clone(&pair)));
        Ok(pair)
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}
