//! Validation error model.

use thiserror::Error;

/// Result type for the form validation pipeline.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Client-side validation failure, reported before any network call.
///
/// The `Display` strings are shown to the user verbatim; keep them stable.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Title was empty or whitespace-only.
    #[error("Title is required")]
    TitleRequired,

    /// Price did not parse as a number, or was not strictly positive.
    #[error("Price must be a positive number")]
    PriceNotPositive,

    /// Image URL was empty or whitespace-only.
    #[error("Image URL is required")]
    ImageRequired,

    /// Category id did not parse as an integer.
    #[error("Category ID must be a whole number")]
    CategoryNotInteger,
}
