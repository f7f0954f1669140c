//! Error types for msgtpl.
//!
//! The template engine itself never fails; these errors come from the store,
//! the config file, and the command layer.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for msgtpl operations.
///
/// Each variant maps to a specific process exit code.
#[derive(Error, Debug)]
pub enum MsgtplError {
    /// User provided invalid arguments or input.
    #[error("{0}")]
    UserError(String),

    /// No template with the given id exists.
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Reading or writing the template store failed.
    #[error("Storage failed: {0}")]
    StorageError(String),

    /// The configuration file could not be read or is invalid.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl MsgtplError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MsgtplError::UserError(_) => exit_codes::USER_ERROR,
            MsgtplError::NotFound(_) => exit_codes::NOT_FOUND,
            MsgtplError::StorageError(_) => exit_codes::STORAGE_FAILURE,
            MsgtplError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
        }
    }
}

/// Result type alias for msgtpl operations.
pub type Result<T> = std::result::Result<T, MsgtplError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = MsgtplError::UserError("template name is required".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn not_found_has_correct_exit_code() {
        let err = MsgtplError::NotFound("template_1".to_string());
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
    }

    #[test]
    fn storage_error_has_correct_exit_code() {
        let err = MsgtplError::StorageError("disk full".to_string());
        assert_eq!(err.exit_code(), exit_codes::STORAGE_FAILURE);
    }

    #[test]
    fn config_error_has_correct_exit_code() {
        let err = MsgtplError::ConfigError("preview_length must be greater than 0".to_string());
        assert_eq!(err.exit_code(), exit_codes::CONFIG_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = MsgtplError::NotFound("template_42".to_string());
        assert_eq!(err.to_string(), "Template not found: template_42");

        let err = MsgtplError::StorageError("permission denied".to_string());
        assert_eq!(err.to_string(), "Storage failed: permission denied");
    }
}
