pub mod error;
pub mod recipe;

pub use error::{ErrorCategory, ErrorClassifier, LlmError, Result, SousError};
pub use recipe::{Recipe, normalize_title};
