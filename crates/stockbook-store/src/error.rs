//! # Store Error Types
//!
//! What callers of the store see when a call fails.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Error Flow in Stockbook                         │
//! │                                                                     │
//! │  ValidationError ──► CoreError ──┐                                  │
//! │   (bad input)     (broken rule)  ├──► StoreError ──► Caller         │
//! │                                  │                                  │
//! │  SnapshotError ──────────────────┘                                  │
//! │   (write failed)                                                    │
//! │                                                                     │
//! │  Either way, a failed call has not touched memory or disk: the      │
//! │  store persists the candidate state BEFORE swapping it in.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A corrupt snapshot at load time is deliberately NOT an error: the
//! persistence adapter recovers it to the default state (see [`crate::snapshot`]).

use thiserror::Error;

use stockbook_core::{CoreError, ValidationError};

// =============================================================================
// Snapshot Error
// =============================================================================

/// Failures while writing (or locating) the snapshot file.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Reading, writing, or renaming the snapshot file failed.
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The state could not be serialized.
    #[error("Snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// No platform data directory could be determined and no explicit
    /// path was configured.
    #[error("Could not determine a data directory for the snapshot")]
    NoDataDir,
}

// =============================================================================
// Store Error
// =============================================================================

/// Unified error type for store operations.
///
/// Domain rejections ([`CoreError`]) leave the store fully usable; snapshot
/// failures ([`SnapshotError`]) do too, since the in-memory state is only
/// replaced after a successful write.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Lets validation failures bubble straight to a `StoreResult` with `?`.
impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Core(CoreError::Validation(err))
    }
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_message_passes_through() {
        let err: StoreError = CoreError::DuplicateSku("COKE-330".to_string()).into();
        assert_eq!(err.to_string(), "A product with SKU 'COKE-330' already exists");
    }

    #[test]
    fn test_validation_error_wraps_into_core() {
        let err: StoreError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::Validation(ValidationError::Required { .. }))
        ));
    }
}
