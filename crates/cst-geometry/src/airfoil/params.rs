use std::ops::RangeInclusive;

use cst_core::traits::{ContentKey, Validate};
use cst_core::{CstError, ParamKey, Result};
use serde::{Deserialize, Serialize};

pub const MIN_WEIGHT_COUNT: usize = 3;
pub const MAX_WEIGHT_COUNT: usize = 21;

// Slider ranges for UI collaborators. The engine never clamps to these.
pub const UPPER_WEIGHT_GUIDE: RangeInclusive<f64> = -1.0..=1.0;
pub const LOWER_WEIGHT_GUIDE: RangeInclusive<f64> = -1.0..=0.5;
pub const LE_WEIGHT_GUIDE: RangeInclusive<f64> = -2.0..=2.0;
pub const TE_THICKNESS_GUIDE: RangeInclusive<f64> = 0.0..=0.02;

/// Which airfoil surface a weight vector or curve belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Upper,
    Lower,
}

impl Side {
    /// Sign applied to the trailing-edge half thickness.
    pub fn te_sign(self) -> f64 {
        match self {
            Side::Upper => 1.0,
            Side::Lower => -1.0,
        }
    }
}

/// Accept `count` if it lies in `[MIN_WEIGHT_COUNT, MAX_WEIGHT_COUNT]`.
pub fn check_weight_count(count: i64) -> Result<usize> {
    match usize::try_from(count) {
        Ok(n) if (MIN_WEIGHT_COUNT..=MAX_WEIGHT_COUNT).contains(&n) => Ok(n),
        _ => Err(CstError::WeightCountOutOfRange {
            count,
            min: MIN_WEIGHT_COUNT,
            max: MAX_WEIGHT_COUNT,
        }),
    }
}

/// Full parameter set of a CST airfoil.
///
/// Index `i` of each weight vector multiplies Bernstein term `i`. Both
/// vectors must hold exactly `weight_count` entries; [`Validate::validate`]
/// checks this and the evaluator refuses parameters that fail it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirfoilParams {
    pub weight_count: usize,
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
    /// Strength of the leading-edge bump, added to both surfaces.
    pub le_weight: f64,
    /// Total trailing-edge gap; half goes to each surface.
    pub te_thickness: f64,
}

impl AirfoilParams {
    pub fn new(
        upper: Vec<f64>,
        lower: Vec<f64>,
        le_weight: f64,
        te_thickness: f64,
    ) -> Result<Self> {
        let params = Self {
            weight_count: upper.len(),
            upper,
            lower,
            le_weight,
            te_thickness,
        };
        params.validate()?;
        Ok(params)
    }

    /// Degree of the Bernstein shape polynomial.
    pub fn order(&self) -> usize {
        self.weight_count.saturating_sub(1)
    }

    pub fn weights(&self, side: Side) -> &[f64] {
        match side {
            Side::Upper => &self.upper,
            Side::Lower => &self.lower,
        }
    }

    pub fn weights_mut(&mut self, side: Side) -> &mut [f64] {
        match side {
            Side::Upper => &mut self.upper,
            Side::Lower => &mut self.lower,
        }
    }
}

impl Validate for AirfoilParams {
    fn validate(&self) -> Result<()> {
        check_weight_count(self.weight_count as i64)?;
        if self.upper.len() != self.weight_count || self.lower.len() != self.weight_count {
            return Err(CstError::LengthMismatch {
                expected: self.weight_count,
                upper: self.upper.len(),
                lower: self.lower.len(),
            });
        }
        Ok(())
    }
}

impl ContentKey for AirfoilParams {
    fn content_key(&self) -> ParamKey {
        ParamKey::builder()
            .count(self.weight_count)
            .slice(&self.upper)
            .slice(&self.lower)
            .scalar(self.le_weight)
            .scalar(self.te_thickness)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AirfoilParams {
        AirfoilParams::new(vec![0.2, 0.3, 0.0], vec![-0.2, -0.1, 0.0], 0.1, 0.002).unwrap()
    }

    #[test]
    fn test_new_sets_count_and_order() {
        let p = sample();
        assert_eq!(p.weight_count, 3);
        assert_eq!(p.order(), 2);
        assert_eq!(p.weights(Side::Lower), &[-0.2, -0.1, 0.0]);
    }

    #[test]
    fn test_new_rejects_mismatch() {
        let err = AirfoilParams::new(vec![0.1; 4], vec![0.1; 3], 0.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            CstError::LengthMismatch {
                expected: 4,
                upper: 4,
                lower: 3
            }
        );
    }

    #[test]
    fn test_validate_catches_stale_count() {
        let mut p = sample();
        p.weight_count = 5;
        assert!(matches!(p.validate(), Err(CstError::LengthMismatch { .. })));
    }

    #[test]
    fn test_check_weight_count_bounds() {
        assert!(check_weight_count(2).is_err());
        assert!(check_weight_count(22).is_err());
        assert!(check_weight_count(-3).is_err());
        assert_eq!(check_weight_count(3).unwrap(), 3);
        assert_eq!(check_weight_count(21).unwrap(), 21);
    }

    #[test]
    fn test_weights_mut_edits_one_side() {
        let mut p = sample();
        p.weights_mut(Side::Upper)[1] = 0.5;
        assert_eq!(p.upper[1], 0.5);
        assert_eq!(p.lower[1], -0.1);
    }

    #[test]
    fn test_content_key_tracks_changes() {
        let a = sample();
        let mut b = sample();
        assert_eq!(a.content_key(), b.content_key());

        b.te_thickness = 0.003;
        assert_ne!(a.content_key(), b.content_key());
    }

    #[test]
    fn test_serde_snapshot() {
        let p = sample();
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"weight_count\":3"));
        let back: AirfoilParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
