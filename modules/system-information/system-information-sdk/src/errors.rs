//! Error types for the system-information SDK.
//!
//! Validation problems are not SDK errors: they travel inside
//! [`crate::models::ExecutionResult`] so the caller can collect every
//! field problem in one round trip. This enum covers the failures that
//! mean the system could not save the input at all.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum SystemInformationError {
    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error")]
    Internal,
}

impl SystemInformationError {
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}
