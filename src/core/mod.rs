pub mod error;
pub mod value;

pub use error::{BehaviorError, Result};
pub use value::Value;
