//! Store snapshots for transport across a process boundary
//!
//! The engine itself does no I/O; a persistence collaborator serializes a
//! [`Snapshot`] however it likes (the JSON helpers here are the canonical
//! form) and restores it later. The contract is exact round-trip of every
//! store attribute: resources with documentation, parent/child edges,
//! locations, template variables, methods with media types, plus the
//! configuration. A semantic digest over the store guards the restore path.

pub mod digest;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{RestmapError, Result};
use crate::ops::Store;

/// Snapshot schema version, bumped on envelope changes
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// A point-in-time capture of the whole raw or canonical store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Envelope schema version
    pub schema_version: u32,

    /// When this snapshot was taken
    pub created_at: DateTime<Utc>,

    /// Digest over the store's canonical JSON, excluding this envelope
    pub semantic_digest: String,

    /// The captured store
    pub store: Store,
}

/// Capture a snapshot of a store
///
/// # Errors
///
/// Returns `Serialization` if digest computation fails.
pub fn snapshot(store: &Store) -> Result<Snapshot> {
    Ok(Snapshot {
        schema_version: SNAPSHOT_SCHEMA_VERSION,
        created_at: Utc::now(),
        semantic_digest: digest::compute_store_digest(store)?,
        store: store.clone(),
    })
}

/// Restore the store captured in a snapshot
///
/// # Errors
///
/// Returns `DigestMismatch` if the store disagrees with the recorded
/// semantic digest, or `Serialization` if digest computation fails.
pub fn restore(snapshot: &Snapshot) -> Result<Store> {
    let actual = digest::compute_store_digest(&snapshot.store)?;
    if actual != snapshot.semantic_digest {
        return Err(RestmapError::DigestMismatch {
            expected: snapshot.semantic_digest.clone(),
            actual,
        });
    }
    Ok(snapshot.store.clone())
}

/// Serialize a snapshot to its canonical JSON form
///
/// # Errors
///
/// Returns `Serialization` on failure.
pub fn to_json(snapshot: &Snapshot) -> Result<String> {
    Ok(serde_json::to_string(snapshot)?)
}

/// Deserialize a snapshot from its canonical JSON form
///
/// # Errors
///
/// Returns `Serialization` if the input is not a valid snapshot.
pub fn from_json(raw: &str) -> Result<Snapshot> {
    Ok(serde_json::from_str(raw)?)
}
