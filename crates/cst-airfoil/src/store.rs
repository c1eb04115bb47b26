//! Caller-owned parameter store with validated setters.
//!
//! Every setter either applies its change and returns `Ok(())`, or returns
//! the reason for rejection and leaves the store exactly as it was. The
//! `*_str` variants take raw text input, as typed into a form field.

use std::sync::Arc;

use cst_core::traits::Validate;
use cst_core::{CstError, Result};
use cst_geometry::{AirfoilParams, CurvePair, Side};
use cst_math::Sampling;
use log::debug;

use crate::cache::CurveCache;
use crate::defaults::dae11;
use crate::reset::generic_weights;

fn parse_count(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|e| CstError::Parse(format!("weight count {:?}: {}", input, e)))
}

fn parse_real(field: &'static str, input: &str) -> Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|e| CstError::Parse(format!("{} {:?}: {}", field, input, e)))
}

fn check_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CstError::NonFinite { field, value })
    }
}

fn log_rejection<T>(op: &str, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        debug!("{} rejected: {}", op, e);
    }
    result
}

/// Current airfoil parameters plus the memoized curves derived from them.
#[derive(Debug)]
pub struct ParameterStore {
    params: AirfoilParams,
    sampling: Sampling,
    cache: CurveCache,
}

impl ParameterStore {
    /// Store loaded with the DAE-11 profile and default sampling.
    pub fn new() -> Self {
        Self {
            params: dae11(),
            sampling: Sampling::default(),
            cache: CurveCache::new(),
        }
    }

    pub fn with_params(params: AirfoilParams, sampling: Sampling) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            sampling,
            cache: CurveCache::new(),
        })
    }

    pub fn params(&self) -> &AirfoilParams {
        &self.params
    }

    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    pub fn weight_count(&self) -> usize {
        self.params.weight_count
    }

    pub fn set_sampling(&mut self, sampling: Sampling) {
        self.sampling = sampling;
    }

    /// Replace both weight vectors with the generic profile of `count` weights.
    ///
    /// Leading-edge weight and trailing-edge thickness are kept.
    pub fn reset_order(&mut self, count: i64) -> Result<()> {
        let (upper, lower) = log_rejection("reset_order", generic_weights(count))?;
        self.params.weight_count = upper.len();
        self.params.upper = upper;
        self.params.lower = lower;
        debug!("reset to {} weights", self.params.weight_count);
        Ok(())
    }

    pub fn reset_order_str(&mut self, input: &str) -> Result<()> {
        let count = log_rejection("reset_order", parse_count(input))?;
        self.reset_order(count)
    }

    /// Overwrite one weight. The index must be below the weight count.
    pub fn set_weight(&mut self, side: Side, index: usize, value: f64) -> Result<()> {
        let value = log_rejection("set_weight", check_finite("weight", value))?;
        let weights = self.params.weights_mut(side);
        let len = weights.len();
        let slot = weights
            .get_mut(index)
            .ok_or(CstError::IndexOutOfRange { index, len });
        *log_rejection("set_weight", slot)? = value;
        Ok(())
    }

    pub fn set_weight_str(&mut self, side: Side, index: usize, input: &str) -> Result<()> {
        let value = log_rejection("set_weight", parse_real("weight", input))?;
        self.set_weight(side, index, value)
    }

    pub fn set_le_weight(&mut self, value: f64) -> Result<()> {
        self.params.le_weight = log_rejection("set_le_weight", check_finite("le_weight", value))?;
        Ok(())
    }

    pub fn set_le_weight_str(&mut self, input: &str) -> Result<()> {
        let value = log_rejection("set_le_weight", parse_real("le_weight", input))?;
        self.set_le_weight(value)
    }

    /// Negative thickness is accepted and swaps which surface sits higher
    /// at the trailing edge.
    pub fn set_te_thickness(&mut self, value: f64) -> Result<()> {
        self.params.te_thickness =
            log_rejection("set_te_thickness", check_finite("te_thickness", value))?;
        Ok(())
    }

    pub fn set_te_thickness_str(&mut self, input: &str) -> Result<()> {
        let value = log_rejection("set_te_thickness", parse_real("te_thickness", input))?;
        self.set_te_thickness(value)
    }

    /// Reload the DAE-11 profile. Sampling is kept.
    pub fn restore_defaults(&mut self) {
        self.params = dae11();
    }

    /// Curves for the current parameters, recomputed only if an input changed.
    pub fn curves(&mut self) -> Result<Arc<CurvePair>> {
        self.cache.get_or_compute(&self.params, &self.sampling)
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{DAE11_LOWER, DAE11_UPPER};

    #[test_log::test]
    fn test_starts_with_dae11() {
        let store = ParameterStore::new();
        assert_eq!(store.weight_count(), 8);
        assert_eq!(store.params().upper, DAE11_UPPER.to_vec());
        assert_eq!(store.params().lower, DAE11_LOWER.to_vec());
        assert_eq!(store.sampling().num_points, 400);
    }

    #[test_log::test]
    fn test_reset_bounds() {
        let mut store = ParameterStore::new();
        let before = store.params().clone();

        assert!(store.reset_order(2).is_err());
        assert!(store.reset_order(22).is_err());
        assert_eq!(store.params(), &before);

        store.reset_order(3).unwrap();
        assert_eq!(store.weight_count(), 3);
        store.reset_order(21).unwrap();
        assert_eq!(store.weight_count(), 21);
        assert_eq!(store.params().upper.len(), 21);
        assert_eq!(store.params().lower.len(), 21);
    }

    #[test_log::test]
    fn test_reset_keeps_le_and_te() {
        let mut store = ParameterStore::new();
        store.set_le_weight(-1.25).unwrap();
        store.reset_order(5).unwrap();
        assert_eq!(store.params().le_weight, -1.25);
        assert_eq!(store.params().te_thickness, 0.0001);
    }

    #[test_log::test]
    fn test_reset_from_text() {
        let mut store = ParameterStore::new();
        store.reset_order_str(" 10 ").unwrap();
        assert_eq!(store.weight_count(), 10);

        let before = store.params().clone();
        assert!(matches!(store.reset_order_str("ten"), Err(CstError::Parse(_))));
        assert!(matches!(store.reset_order_str(""), Err(CstError::Parse(_))));
        assert!(matches!(store.reset_order_str("4.5"), Err(CstError::Parse(_))));
        assert!(matches!(
            store.reset_order_str("-4"),
            Err(CstError::WeightCountOutOfRange { count: -4, .. })
        ));
        assert_eq!(store.params(), &before);
    }

    #[test_log::test]
    fn test_set_weight() {
        let mut store = ParameterStore::new();
        store.set_weight(Side::Lower, 0, -0.3).unwrap();
        assert_eq!(store.params().lower[0], -0.3);
        assert_eq!(store.params().upper[0], DAE11_UPPER[0]);

        // Values outside the slider guidance are still accepted
        store.set_weight(Side::Upper, 7, 3.5).unwrap();
        assert_eq!(store.params().upper[7], 3.5);
    }

    #[test_log::test]
    fn test_set_weight_rejections() {
        let mut store = ParameterStore::new();
        let before = store.params().clone();

        assert_eq!(
            store.set_weight(Side::Upper, 8, 0.1),
            Err(CstError::IndexOutOfRange { index: 8, len: 8 })
        );
        assert!(matches!(
            store.set_weight(Side::Upper, 0, f64::NAN),
            Err(CstError::NonFinite { .. })
        ));
        assert!(store.set_weight_str(Side::Lower, 1, "abc").is_err());
        assert!(store.set_weight_str(Side::Lower, 1, "inf").is_err());
        assert_eq!(store.params(), &before);

        store.set_weight_str(Side::Lower, 1, "0.125").unwrap();
        assert_eq!(store.params().lower[1], 0.125);
    }

    #[test_log::test]
    fn test_scalar_setters() {
        let mut store = ParameterStore::new();
        store.set_le_weight_str("-0.75").unwrap();
        store.set_te_thickness_str("0.015").unwrap();
        assert_eq!(store.params().le_weight, -0.75);
        assert_eq!(store.params().te_thickness, 0.015);

        store.set_te_thickness(-0.002).unwrap();
        assert_eq!(store.params().te_thickness, -0.002);

        assert!(store.set_le_weight_str("").is_err());
        assert!(store.set_te_thickness(f64::INFINITY).is_err());
        assert_eq!(store.params().le_weight, -0.75);
        assert_eq!(store.params().te_thickness, -0.002);
    }

    #[test_log::test]
    fn test_curves_memoized_until_edit() {
        let mut store = ParameterStore::new();
        let a = store.curves().unwrap();
        let b = store.curves().unwrap();
        assert!(Arc::ptr_eq(&a, &b));

        store.set_le_weight(0.0).unwrap();
        let c = store.curves().unwrap();
        assert!(!Arc::ptr_eq(&a, &c));

        // A rejected edit does not invalidate the cache
        assert!(store.set_le_weight_str("x").is_err());
        let d = store.curves().unwrap();
        assert!(Arc::ptr_eq(&c, &d));
    }

    #[test_log::test]
    fn test_restore_defaults() {
        let mut store = ParameterStore::new();
        store.reset_order(12).unwrap();
        store.set_le_weight(1.0).unwrap();
        store.restore_defaults();
        assert_eq!(store.params(), &dae11());
    }

    #[test_log::test]
    fn test_with_params_validates() {
        let mut params = dae11();
        params.weight_count = 9;
        assert!(ParameterStore::with_params(params, Sampling::default()).is_err());

        let store = ParameterStore::with_params(dae11(), Sampling::new(50).unwrap()).unwrap();
        assert_eq!(store.sampling().sample_count(), 51);
    }
}
