//! Digest computation for store snapshots.
//!
//! Provides deterministic SHA256 digests over the canonical JSON form of a
//! store. The store serializes from ordered containers, so the same state
//! always produces the same bytes and therefore the same digest.

use sha2::{Digest, Sha256};

use crate::errors::Result;
use crate::ops::Store;

/// Compute the semantic digest of a store.
///
/// The digest covers every resource attribute and the configuration, but not
/// the snapshot envelope (`created_at` stays outside), so the same semantic
/// state is stable across snapshot times.
///
/// ## Errors
///
/// Returns `RestmapError::Serialization` if JSON serialization fails.
pub fn compute_store_digest(store: &Store) -> Result<String> {
    let canonical = serde_json::to_string(store)?;
    Ok(hash_string(&canonical))
}

fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
