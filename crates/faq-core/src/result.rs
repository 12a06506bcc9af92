//! Result type aliases for the FAQ service.

use crate::FaqError;

/// A specialized `Result` type for FAQ operations.
pub type FaqResult<T> = Result<T, FaqError>;
