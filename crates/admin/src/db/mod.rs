//! Durable storage for the admin console.
//!
//! The whole site (configuration plus catalog) is one JSON snapshot file;
//! see [`snapshot`].

pub mod snapshot;

use thiserror::Error;

pub use snapshot::{SNAPSHOT_VERSION, Snapshot, SnapshotRepository};

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Reading or writing the snapshot file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot is not valid JSON for the expected shape.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The snapshot parsed but its content breaks a store invariant.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// The snapshot was written by an incompatible version.
    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u32),
}
