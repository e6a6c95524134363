//! Error types for the payroll engine.
//!
//! Errors cover period validation, amounts too large for decimal
//! arithmetic, roster integrity and configuration loading.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use rol_pagos_engine::error::EngineError;
///
/// let error = EngineError::UnknownEmployee {
///     employee_id: "emp-42".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown employee: emp-42");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The number of days in the pay period was zero or negative.
    #[error("Invalid period length: {days} days (must be at least 1)")]
    InvalidPeriodLength {
        /// The rejected day count.
        days: i64,
    },

    /// An amount exceeded the range of decimal arithmetic.
    #[error("Amount overflow computing {field}")]
    AmountOverflow {
        /// The derived amount that could not be represented.
        field: &'static str,
    },

    /// A payroll line or input referenced an employee missing from the roster.
    #[error("Unknown employee: {employee_id}")]
    UnknownEmployee {
        /// The identity that could not be resolved.
        employee_id: String,
    },

    /// Two employees in the same roster share an identity.
    #[error("Duplicate employee: {employee_id}")]
    DuplicateEmployee {
        /// The identity that appeared more than once.
        employee_id: String,
    },

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

    /// A configuration value was present but unusable.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
