//! Error types for Strata
//!
//! Provides a unified error type for all operations.
//!
//! The resolution chain only swallows an error when it is the signal to try
//! the next tier (missing or unreadable snapshot → origin fetch). Everything
//! else terminates the current call and is surfaced to the caller.

use thiserror::Error;

use crate::model::RecordKind;

/// Result type alias using StrataError
pub type Result<T> = std::result::Result<T, StrataError>;

/// Unified error type for Strata operations
#[derive(Debug, Error)]
pub enum StrataError {
    // -------------------------------------------------------------------------
    // Resolution Errors
    // -------------------------------------------------------------------------
    #[error("no {kind} found for id {id}")]
    NotFound { kind: RecordKind, id: u64 },

    #[error("no {kind} snapshot on disk")]
    SnapshotMissing { kind: RecordKind },

    // -------------------------------------------------------------------------
    // Validation Errors (create path, never retried)
    // -------------------------------------------------------------------------
    #[error("{field} field is required")]
    MissingField { field: &'static str },

    #[error("{kind} {field} must be unique: {value:?} is already taken")]
    UniqueViolation {
        kind: RecordKind,
        field: &'static str,
        value: String,
    },

    #[error("{field} does not reference an existing {references}")]
    Relationship {
        field: &'static str,
        references: RecordKind,
    },

    // -------------------------------------------------------------------------
    // Network Tier Errors
    // -------------------------------------------------------------------------
    #[error("origin unavailable: {0}")]
    OriginUnavailable(String),

    #[error("failed to decode {kind} collection: {source}")]
    Decode {
        kind: RecordKind,
        #[source]
        source: serde_json::Error,
    },

    // -------------------------------------------------------------------------
    // Disk Tier Errors
    // -------------------------------------------------------------------------
    #[error("snapshot persistence failed: {0}")]
    Persistence(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StrataError {
    /// True for validation failures that reject the candidate record.
    ///
    /// These are caller mistakes, not tier failures, and are never retried.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StrataError::MissingField { .. }
                | StrataError::UniqueViolation { .. }
                | StrataError::Relationship { .. }
        )
    }
}
