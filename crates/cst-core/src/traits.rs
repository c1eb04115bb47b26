use crate::error::Result;
use crate::key::ParamKey;

/// Validate structural integrity of a parameter set before it is evaluated.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Produce a key that changes whenever any evaluation input changes.
pub trait ContentKey {
    fn content_key(&self) -> ParamKey;
}
