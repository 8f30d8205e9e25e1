//! Canonical JSON request bodies.
//!
//! The signature covers the SHA-1 of the body bytes, so the body must be
//! serialized exactly once and those bytes sent unchanged. [`OrderedBody`]
//! keeps fields in the order they were added; [`RequestBody`] owns the
//! serialized bytes and is what both the signer and the transport read.

use serde::Serialize;
use serde::ser::SerializeMap;
use serde_json::value::RawValue;

use crate::error::SmsError;

/// A JSON object whose keys serialize in insertion order.
///
/// Each value is serialized as it is added, so a struct value keeps its
/// declared field order too.
#[derive(Debug, Clone, Default)]
pub struct OrderedBody {
    fields: Vec<(String, Box<RawValue>)>,
}

impl OrderedBody {
    /// Create an empty body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, builder-style.
    pub fn field(mut self, key: impl Into<String>, value: impl Serialize) -> Result<Self, SmsError> {
        self.push(key, value)?;
        Ok(self)
    }

    /// Append a field.
    ///
    /// Fails with [`SmsError::DuplicateKey`] if the key is already present.
    pub fn push(&mut self, key: impl Into<String>, value: impl Serialize) -> Result<(), SmsError> {
        let key = key.into();
        if self.fields.iter().any(|(existing, _)| *existing == key) {
            return Err(SmsError::DuplicateKey(key));
        }
        let raw = serde_json::value::to_raw_value(&value)?;
        self.fields.push((key, raw));
        Ok(())
    }

    /// Keys in serialization order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the body has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serialize to the bytes that will be signed and sent.
    pub fn to_request_body(&self) -> Result<RequestBody, SmsError> {
        RequestBody::from_serialize(self)
    }
}

impl Serialize for OrderedBody {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Serialized body bytes, produced once and shared by signer and transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBody {
    bytes: Vec<u8>,
}

impl RequestBody {
    /// Serialize any value to compact JSON.
    ///
    /// Struct fields keep their declaration order. Avoid `HashMap` values,
    /// whose iteration order is unspecified.
    pub fn from_serialize<T>(value: &T) -> Result<Self, SmsError>
    where
        T: Serialize + ?Sized,
    {
        Ok(Self {
            bytes: serde_json::to_vec(value)?,
        })
    }

    /// The exact bytes to hash and transmit.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Body length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the body is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for RequestBody {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
