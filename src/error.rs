//! Error types for the Salary Raise Sustainability Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only the configuration and roster loading layer can fail; the calculation
//! engine itself is total and never returns an error.

use thiserror::Error;

/// The main error type for the Salary Raise Sustainability Engine.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use raise_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An employee record in the roster was invalid.
    #[error("Invalid employee '{employee_id}': {message}")]
    InvalidEmployee {
        /// The id of the invalid employee record.
        employee_id: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// The financial policy contained an invalid value.
    #[error("Invalid policy field '{field}': {message}")]
    InvalidPolicy {
        /// The policy field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
