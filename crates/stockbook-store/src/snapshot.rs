//! # Snapshot Persistence Adapter
//!
//! Loads and saves the entire application state as one JSON document.
//!
//! ## Persistence Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Snapshot Lifecycle                             │
//! │                                                                     │
//! │  Store::open ──► load() ──► AppState                                │
//! │                    │                                                │
//! │                    ├── file missing ──► AppState::default()         │
//! │                    └── file corrupt ──► warn! + default()           │
//! │                                                                     │
//! │  every mutation ──► save(&state)                                    │
//! │                    │                                                │
//! │                    ├── 1. write  <snapshot>.tmp                     │
//! │                    └── 2. rename <snapshot>.tmp → <snapshot>        │
//! │                                                                     │
//! │  The rename makes the overwrite atomic from the caller's view:      │
//! │  readers see either the old document or the new one, never a        │
//! │  partial write.                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no schema versioning or migration logic. A shape mismatch after
//! a schema change deserializes as far as the serde defaults allow, or
//! recovers to the default state.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, warn};

use crate::error::SnapshotError;
use stockbook_core::AppState;

/// Environment variable overriding the snapshot location.
pub const SNAPSHOT_ENV_VAR: &str = "STOCKBOOK_SNAPSHOT_PATH";

/// File name of the snapshot document under the platform data directory.
/// Carries the storage key of the snapshot format it persists.
pub const SNAPSHOT_FILE_NAME: &str = "inventory_app_v1.json";

// =============================================================================
// Store Configuration
// =============================================================================

/// Configuration for opening a store.
///
/// ## Snapshot Path Resolution (priority order)
/// 1. `snapshot_path` set explicitly (tests, embedders)
/// 2. `STOCKBOOK_SNAPSHOT_PATH` environment variable
/// 3. Platform data directory, e.g. on Linux
///    `~/.local/share/stockbook/inventory_app_v1.json`
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Explicit snapshot file path. `None` falls back to the env var,
    /// then the platform default.
    pub snapshot_path: Option<PathBuf>,
}

impl StoreConfig {
    /// Configuration with an explicit snapshot path.
    pub fn new(snapshot_path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            snapshot_path: Some(snapshot_path.into()),
        }
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Handle to the single durable snapshot slot.
#[derive(Debug, Clone)]
pub struct Snapshot {
    path: PathBuf,
}

impl Snapshot {
    /// A snapshot slot at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Snapshot { path: path.into() }
    }

    /// Resolves the snapshot location from configuration.
    ///
    /// See [`StoreConfig`] for the priority order.
    pub fn resolve(config: &StoreConfig) -> Result<Self, SnapshotError> {
        if let Some(path) = &config.snapshot_path {
            return Ok(Snapshot::at(path.clone()));
        }

        if let Ok(path) = std::env::var(SNAPSHOT_ENV_VAR) {
            return Ok(Snapshot::at(path));
        }

        let proj_dirs =
            ProjectDirs::from("com", "stockbook", "stockbook").ok_or(SnapshotError::NoDataDir)?;
        Ok(Snapshot::at(proj_dirs.data_dir().join(SNAPSHOT_FILE_NAME)))
    }

    /// The snapshot file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the last saved state.
    ///
    /// ## Failure Policy
    /// A missing file is the first run; an unreadable or unparseable file
    /// is treated the same way. Both recover to [`AppState::default`]
    /// rather than propagating an error - corruption must never brick the
    /// application. The recovery is logged at warn level.
    pub fn load(&self) -> AppState {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No snapshot yet, starting from defaults");
                return AppState::default();
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Snapshot unreadable, starting from defaults"
                );
                return AppState::default();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(state) => state,
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Snapshot corrupt, starting from defaults"
                );
                AppState::default()
            }
        }
    }

    /// Serializes the full state and atomically replaces the snapshot file.
    ///
    /// The document is written to a sibling temp file first and renamed
    /// over the snapshot, so no partial write is ever observable.
    pub fn save(&self, state: &AppState) -> Result<(), SnapshotError> {
        let json = serde_json::to_vec(state)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), bytes = json.len(), "Snapshot saved");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
