//! Content digests for catalog snapshots.
//!
//! A digest is taken over the canonical JSON form, so two catalogs holding the
//! same records hash identically regardless of the key order inside schema
//! definitions.

use std::fmt;

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::errors::PvrError;
use crate::serde::to_canonical_json_bytes;

/// Hex characters kept by [`ContentHash::short`].
const SHORT_LEN: usize = 12;

/// SHA256 digest of a value's canonical JSON encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Digests `value` through its canonical JSON bytes.
    pub fn of<T: Serialize>(value: &T) -> Result<Self, PvrError> {
        let bytes = to_canonical_json_bytes(value)?;
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&Sha256::digest(&bytes));
        Ok(Self(digest))
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Leading hex characters, for log lines.
    pub fn short(&self) -> String {
        let mut hex = self.to_string();
        hex.truncate(SHORT_LEN);
        hex
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|byte| write!(f, "{byte:02x}"))
    }
}

impl Serialize for ContentHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn digest_ignores_source_key_order() {
        let a: serde_json::Value =
            serde_json::from_str(r#"{"type":"object","properties":{"zeta":{},"alpha":{}}}"#).unwrap();
        let b: serde_json::Value =
            serde_json::from_str(r#"{"properties":{"alpha":{},"zeta":{}},"type":"object"}"#).unwrap();
        assert_eq!(ContentHash::of(&a).unwrap(), ContentHash::of(&b).unwrap());
        assert_ne!(
            ContentHash::of(&a).unwrap(),
            ContentHash::of(&json!({"type": "array"})).unwrap()
        );
    }

    #[test]
    fn renders_as_lowercase_hex() {
        let hash = ContentHash::of(&json!(null)).unwrap();
        let hex = hash.to_string();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        assert_eq!(hash.short(), hex[..12]);
        assert_eq!(serde_json::to_value(hash).unwrap(), json!(hex));
    }
}
