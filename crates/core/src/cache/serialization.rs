//! Serialization of cached lookup results.
//!
//! A cache entry stores the JSON encoding of `Option<Locator>`. The `null`
//! encoding is a cached absence — "the resolver looked and found nothing" —
//! which is a hit, distinct from the key not being present in the store at
//! all. Collapsing the two would silently defeat negative caching.

use crate::resolver::Locator;
use thiserror::Error;

/// Errors that can occur during lookup serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a lookup result to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a lookup result.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a lookup result to JSON bytes.
///
/// `None` — a negative result — serializes to `null` and is stored like any
/// other value.
pub fn serialize_lookup(lookup: &Option<Locator>) -> Result<Vec<u8>> {
    serde_json::to_vec(lookup).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes back into a lookup result.
pub fn deserialize_lookup(bytes: &[u8]) -> Result<Option<Locator>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_found() {
        let lookup = Some(Locator::new("/src/Foo.inc"));

        let bytes = serialize_lookup(&lookup).expect("serialize should succeed");
        let deserialized = deserialize_lookup(&bytes).expect("deserialize should succeed");

        assert_eq!(lookup, deserialized);
    }

    #[test]
    fn test_roundtrip_absence() {
        let lookup: Option<Locator> = None;

        let bytes = serialize_lookup(&lookup).expect("serialize should succeed");
        let deserialized = deserialize_lookup(&bytes).expect("deserialize should succeed");

        assert_eq!(deserialized, None);
    }

    #[test]
    fn test_absence_encodes_as_null() {
        let bytes = serialize_lookup(&None).expect("serialize should succeed");
        assert_eq!(bytes, b"null");
    }

    #[test]
    fn test_locator_encodes_transparently() {
        let bytes =
            serialize_lookup(&Some(Locator::new("/src/Foo.inc"))).expect("serialize should succeed");
        assert_eq!(bytes, b"\"/src/Foo.inc\"");
    }

    #[test]
    fn test_deserialize_malformed_bytes() {
        let malformed = b"not valid json";
        let result = deserialize_lookup(malformed);

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, SerializationError::DeserializeFailed(_)));
    }

    #[test]
    fn test_deserialize_wrong_shape() {
        let malformed = b"{\"unexpected\": true}";
        let result = deserialize_lookup(malformed);

        assert!(result.is_err());
    }
}
