//! Error types for the Whispr dashboard core.
//!
//! This module defines the centralized error type [`WhisprError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. The filter engine
//! and card navigator never fail; every variant here originates at the repository,
//! configuration, or input-validation boundary.

use thiserror::Error;

/// The main error type for Whispr dashboard operations.
///
/// # Examples
///
/// ```
/// use whispr_dash::WhisprError;
///
/// fn load_profile() -> Result<(), WhisprError> {
///     Err(WhisprError::NotFound("profile 'ghost'".to_string()))
/// }
///
/// assert!(load_profile().is_err());
/// ```
#[derive(Debug, Error)]
pub enum WhisprError {
    /// The requested user or whispr does not exist in the backend.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The hosted backend could not be reached or rejected the request.
    #[error("Network error: {0}")]
    Network(String),

    /// Reading or writing a local whispr store failed.
    ///
    /// Covers malformed JSON documents and serialization failures. Raw
    /// filesystem failures use [`WhisprError::Io`].
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// User-supplied content was rejected before it reached the backend.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// A specialized `Result` type for Whispr operations.
pub type Result<T> = std::result::Result<T, WhisprError>;
