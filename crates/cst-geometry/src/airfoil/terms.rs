//! Scalar terms of the CST surface equation.

/// Class function `sqrt(psi) * (1 - psi)`: round nose, sharp tail.
pub fn class_function(psi: f64) -> f64 {
    psi.sqrt() * (1.0 - psi)
}

/// Decay exponent of the leading-edge term, `weight_count + 0.5`.
///
/// Tied to the weight count rather than the order, i.e. `order + 1.5`.
pub fn leading_edge_exponent(weight_count: usize) -> f64 {
    weight_count as f64 + 0.5
}

/// Leading-edge modification `le_weight * psi * (1 - psi)^(weight_count + 0.5)`.
///
/// Vanishes at both ends of the chord.
pub fn leading_edge_term(le_weight: f64, psi: f64, weight_count: usize) -> f64 {
    le_weight * psi * (1.0 - psi).powf(leading_edge_exponent(weight_count))
}

/// Trailing-edge offset for one surface: `±psi * te_thickness / 2`.
pub fn trailing_edge_offset(te_thickness: f64, psi: f64, sign: f64) -> f64 {
    sign * psi * (te_thickness / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_class_function_ends() {
        assert_eq!(class_function(0.0), 0.0);
        assert_eq!(class_function(1.0), 0.0);
        assert_relative_eq!(class_function(0.25), 0.5 * 0.75);
    }

    #[test]
    fn test_leading_edge_exponent() {
        assert_eq!(leading_edge_exponent(8), 8.5);
        assert_eq!(leading_edge_exponent(3), 3.5);
    }

    #[test]
    fn test_leading_edge_term_vanishes_at_ends() {
        assert_eq!(leading_edge_term(0.5035, 0.0, 8), 0.0);
        assert_eq!(leading_edge_term(0.5035, 1.0, 8), 0.0);
    }

    #[test]
    fn test_leading_edge_term_value() {
        let expected = 2.0 * 0.1 * 0.9_f64.powf(4.5);
        assert_relative_eq!(leading_edge_term(2.0, 0.1, 4), expected, epsilon = 1e-15);
    }

    #[test]
    fn test_trailing_edge_offset() {
        assert_eq!(trailing_edge_offset(0.0001, 1.0, 1.0), 0.00005);
        assert_eq!(trailing_edge_offset(0.0001, 1.0, -1.0), -0.00005);
        assert_eq!(trailing_edge_offset(0.0001, 0.0, 1.0), 0.0);
    }
}
