//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll computation.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
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

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse or validation error.
        message: String,
    },

    /// A payroll input field was invalid.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A monthly salary did not match any SSS contribution band.
    ///
    /// A validated table is total over the non-negative salaries, so this
    /// indicates a broken table and is never silently defaulted.
    #[error("No SSS contribution band covers monthly salary {salary}")]
    ContributionGap {
        /// The salary that fell outside every band.
        salary: Decimal,
    },

    /// A thirteenth-month computation found no qualifying records.
    #[error("No basic pay records found for employee '{employee_id}' in the {year} window")]
    NoDataFound {
        /// The employee the computation was requested for.
        employee_id: String,
        /// The target year of the December-to-November window.
        year: i32,
    },

    /// The record store collaborator failed.
    #[error("Record store unavailable: {message}")]
    StoreUnavailable {
        /// A description of the store failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::InvalidInput {
            field: "overtime_hours".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input field 'overtime_hours': must not be negative"
        );
    }

    #[test]
    fn test_contribution_gap_displays_salary() {
        let error = EngineError::ContributionGap {
            salary: Decimal::from_str("15000").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "No SSS contribution band covers monthly salary 15000"
        );
    }

    #[test]
    fn test_no_data_found_displays_employee_and_year() {
        let error = EngineError::NoDataFound {
            employee_id: "emp_001".to_string(),
            year: 2025,
        };
        assert_eq!(
            error.to_string(),
            "No basic pay records found for employee 'emp_001' in the 2025 window"
        );
    }

    #[test]
    fn test_store_unavailable_displays_message() {
        let error = EngineError::StoreUnavailable {
            message: "connection refused".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Record store unavailable: connection refused"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_no_data_found() -> EngineResult<()> {
            Err(EngineError::NoDataFound {
                employee_id: "emp_001".to_string(),
                year: 2025,
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_no_data_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
