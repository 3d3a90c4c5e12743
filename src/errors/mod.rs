//! Error types for the report converter.
//!
//! A single error enum covers the whole pipeline; callers distinguish caller
//! mistakes from unexpected failures through [`ConversionError::is_user_error`].

mod conversion_error;

pub use conversion_error::{ConversionError, UNEXPECTED_ERROR_EXIT_CODE, USER_ERROR_EXIT_CODE};

/// Result type alias for conversion operations.
pub type ConversionResult<T> = std::result::Result<T, ConversionError>;
