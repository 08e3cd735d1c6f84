//! Error types for the billing and sales calculators

use thiserror::Error;

/// Errors raised by the core operations.
///
/// Every failure is a rejected operation: the caller reports it and the
/// stored record (if any) is left as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A field was missing, blank, unparseable or out of range
    #[error("Validation error on {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// The single slot is empty
    #[error("{0} not found")]
    NotFound(&'static str),
}

impl CoreError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        CoreError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Field that failed validation, if this is a validation error
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CoreError::Validation { field, .. } => Some(field),
            CoreError::NotFound(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound(_))
    }
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
