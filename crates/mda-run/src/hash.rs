//! Stable hashing of serializable payloads.

use mda_core::errors::{ErrorInfo, MdaError};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Computes a stable hexadecimal hash for the provided serializable payload.
///
/// Configuration maps are ordered (`BTreeMap`), so the JSON encoding and
/// therefore the hash are deterministic.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, MdaError> {
    let bytes = serde_json::to_vec(value)
        .map_err(|err| MdaError::Io(ErrorInfo::new("json-encode", err.to_string())))?;
    let digest = Sha256::digest(bytes);
    Ok(format!("{:x}", digest))
}
