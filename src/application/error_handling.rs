// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-facing responses
// - Provides one consistent error format for the command loop
// - Logs errors that are not the user's fault

use log::error;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::error::AppError;

/// Standard error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Referenced entity does not exist
    NotFound,

    /// Invalid user input
    Validation,

    /// Duplicate or referential-integrity conflict
    Conflict,

    /// Domain invariant violation
    DomainError,

    /// Persisted data is malformed
    DataLoading,

    /// File system error
    FileSystem,

    /// Other/unknown error
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::InvalidInput(message) => Self::validation(message),

            AppError::Domain(domain_error) => {
                let error_type = match &domain_error {
                    DomainError::EntityNotFound(_) => ErrorType::NotFound,
                    DomainError::InvalidArgument(_) => ErrorType::Validation,
                    DomainError::DuplicateEntity(_) | DomainError::ReferentialIntegrity(_) => {
                        ErrorType::Conflict
                    }
                    DomainError::InvariantViolation(_) => ErrorType::DomainError,
                };
                Self {
                    success: false,
                    error_type,
                    message: domain_error.to_string(),
                    details: None,
                }
            }

            AppError::DataLoading(message) => {
                error!("Data loading error: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::DataLoading,
                    message: "Stored data could not be loaded".to_string(),
                    details: Some(message),
                }
            }

            AppError::Serialization(serde_error) => {
                error!("Serialization error: {:?}", serde_error);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "Data serialization failed".to_string(),
                    details: Some(serde_error.to_string()),
                }
            }

            AppError::Io(io_error) => {
                error!("IO error: {:?}", io_error);

                Self {
                    success: false,
                    error_type: ErrorType::FileSystem,
                    message: "File system operation failed".to_string(),
                    details: Some(io_error.to_string()),
                }
            }
        }
    }

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self {
            success: false,
            error_type: ErrorType::Validation,
            message,
            details: None,
        }
    }
}
