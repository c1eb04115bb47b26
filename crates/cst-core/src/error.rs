use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CstError {
    #[error("Weight count {count} out of range [{min}, {max}]")]
    WeightCountOutOfRange { count: i64, min: usize, max: usize },

    #[error(
        "Weight vector length mismatch: expected {expected}, upper has {upper}, lower has {lower}"
    )]
    LengthMismatch {
        expected: usize,
        upper: usize,
        lower: usize,
    },

    #[error("Weight index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Non-finite value for {field}: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid sampling: {0}")]
    InvalidSampling(String),
}

pub type Result<T> = std::result::Result<T, CstError>;
