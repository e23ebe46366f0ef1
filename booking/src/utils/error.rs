use thiserror::Error;
use tracing::error;

use crate::utils::response::{error as error_notice, ErrorNotice};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Event '{event_id}' is sold out")]
    CapacityExceeded { event_id: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Storage error")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::AuthError(_) => "AUTH_ERROR",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Message safe to show in a dialog. Storage failures never leak paths or
    /// parser positions.
    pub fn public_message(&self) -> String {
        match self {
            AppError::CapacityExceeded { .. } => self.to_string(),
            AppError::ValidationError(msg)
            | AppError::AuthError(msg)
            | AppError::Conflict(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg) => msg.clone(),
            AppError::Storage(_) | AppError::Serialization(_) => {
                "Saved data could not be accessed".to_string()
            }
        }
    }

    pub fn log(&self) {
        match self {
            AppError::CapacityExceeded { event_id } => {
                error!(error = ?self, event_id = %event_id, "Capacity exceeded");
            }
            AppError::ValidationError(msg)
            | AppError::AuthError(msg)
            | AppError::Conflict(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg) => {
                error!(error = ?self, message = %msg, "Application error");
            }
            AppError::Storage(e) => {
                error!(error = ?e, "Storage error");
            }
            AppError::Serialization(e) => {
                error!(error = ?e, "Serialization error");
            }
        }
    }

    /// Logs the internal details and converts into the envelope the shell renders.
    pub fn into_notice(self) -> ErrorNotice {
        self.log();
        error_notice(self.code(), self.public_message())
    }
}
