//! Built-in DAE-11 profile loaded at startup.

use cst_geometry::AirfoilParams;

pub const DAE11_LE_WEIGHT: f64 = 0.5035;
pub const DAE11_TE_THICKNESS: f64 = 0.0001;
pub const DAE11_UPPER: [f64; 8] = [
    0.1703, 0.1527, 0.5168, 0.0921, 0.6690, 0.1435, 0.2899, 0.1621,
];
pub const DAE11_LOWER: [f64; 8] = [
    -0.1631, -0.1440, 0.0890, -0.0706, 0.0974, 0.0147, 0.0789, 0.0808,
];

pub fn dae11() -> AirfoilParams {
    AirfoilParams {
        weight_count: DAE11_UPPER.len(),
        upper: DAE11_UPPER.to_vec(),
        lower: DAE11_LOWER.to_vec(),
        le_weight: DAE11_LE_WEIGHT,
        te_thickness: DAE11_TE_THICKNESS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cst_core::traits::Validate;

    #[test]
    fn test_dae11_is_valid() {
        let params = dae11();
        params.validate().unwrap();
        assert_eq!(params.weight_count, 8);
        assert_eq!(params.order(), 7);
    }
}
