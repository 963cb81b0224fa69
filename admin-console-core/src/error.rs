//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::{ArticleStatus, RecordId, RecordType};
use crate::workflow::StatusAction;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The backing store could not be reached or returned malformed data
    #[error("Failed to load records: {0}")]
    LoadFailure(String),

    /// Input rejected by validation (client-side draft parsing or service-side checks)
    #[error("{0}")]
    Validation(String),

    /// Record not found
    #[error("{record_type} #{id} not found")]
    NotFound { record_type: RecordType, id: RecordId },

    /// Workflow action not allowed from the current status
    #[error("Cannot {action} an article that is {from}")]
    InvalidTransition {
        from: ArticleStatus,
        action: StatusAction,
    },

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Failure without any message attached
    #[error("Unknown error")]
    Unknown,
}

impl CoreError {
    /// Human-readable message for notifications.
    ///
    /// `None` when the error carries nothing worth showing, so callers can
    /// fall back to an operation-specific generic text.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Unknown => None,
            Self::Validation(msg) | Self::LoadFailure(msg) | Self::StorageError(msg)
                if msg.trim().is_empty() =>
            {
                None
            }
            other => Some(other.to_string()),
        }
    }

    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) | Self::NotFound { .. } | Self::InvalidTransition { .. } => true,
            Self::LoadFailure(_)
            | Self::StorageError(_)
            | Self::SerializationError(_)
            | Self::Unknown => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
