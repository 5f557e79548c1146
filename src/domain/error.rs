//! Error types for the recipe list view.
//!
//! This module defines the centralized error type [`RecipeShelfError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.

use crate::infrastructure::Region;
use thiserror::Error;

/// The main error type for recipe list view operations.
///
/// Runtime interactions never fail: empty results, unknown meal labels and
/// out-of-range page clicks are ordinary states. Errors are limited to setup
/// concerns such as loading the catalog or mounting onto a document that lacks
/// a display region.
///
/// # Examples
///
/// ```
/// use recipe_shelf::RecipeShelfError;
/// use recipe_shelf::infrastructure::Region;
///
/// let err = RecipeShelfError::MissingRegion(Region::Pagination);
/// assert_eq!(err.to_string(), "Missing display region: pagination");
/// ```
#[derive(Debug, Error)]
pub enum RecipeShelfError {
    /// The catalog source could not be interpreted.
    ///
    /// Raised for unsupported catalog file extensions.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, typically while
    /// reading a catalog file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON catalog failed to parse.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A TOML catalog failed to parse.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The host document does not provide a required display region.
    ///
    /// Fatal for the component: it is a setup precondition violation, detected
    /// once when the view is mounted.
    #[error("Missing display region: {0}")]
    MissingRegion(Region),
}

/// A specialized `Result` type for recipe list view operations.
pub type Result<T> = std::result::Result<T, RecipeShelfError>;
