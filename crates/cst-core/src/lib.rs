pub mod error;
pub mod key;
pub mod traits;

pub use error::{CstError, Result};
pub use key::{KeyBuilder, ParamKey};
