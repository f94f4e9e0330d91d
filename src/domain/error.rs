//! Error types for hostelfinder.
//!
//! This module defines the centralized error type [`HostelfinderError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All errors
//! are implemented using the `thiserror` crate for automatic `Error` trait
//! implementation.

use thiserror::Error;

/// The main error type for hostelfinder operations.
///
/// This enum consolidates all error conditions that can occur while running the
/// directory, from listing-store mutations to storage I/O and configuration
/// issues. Variants wrapping underlying errors from external crates use `#[from]`
/// for automatic conversion.
///
/// The store's not-found policy is an explicit, recoverable signal: mutations
/// targeting an absent listing id return [`HostelfinderError::NotFound`] rather
/// than panicking or silently succeeding.
///
/// # Examples
///
/// ```
/// use hostelfinder::domain::HostelfinderError;
///
/// fn rename_listing(id: &str) -> Result<(), HostelfinderError> {
///     Err(HostelfinderError::NotFound { id: id.to_string() })
/// }
/// ```
#[derive(Debug, Error)]
pub enum HostelfinderError {
    /// A mutation targeted a listing id that is not in the store.
    ///
    /// Returned by update and favorite-toggle operations. Callers are expected
    /// to recover, typically by re-rendering with a message. This is never a
    /// fatal condition.
    #[error("No listing with id {id}")]
    NotFound {
        /// The id that was requested.
        id: String,
    },

    /// Listing form input failed validation.
    ///
    /// Occurs when the add-listing form is submitted with missing required
    /// fields or an unparseable price. The string describes the first problem
    /// found.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage operation failed.
    ///
    /// Occurs when reading from or writing to the document-store backend fails.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    ///
    /// Occurs when a theme file cannot be read or parsed. The string contains
    /// a description of what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for hostelfinder operations.
///
/// This is a type alias for `std::result::Result<T, HostelfinderError>` that
/// simplifies function signatures throughout the codebase.
///
/// # Examples
///
/// ```
/// use hostelfinder::domain::Result;
///
/// fn persist_listings() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, HostelfinderError>;
