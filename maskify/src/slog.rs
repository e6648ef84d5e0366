//! `slog` integration: log documents with their sensitive fields masked.
//!
//! [`IntoMaskedJson::into_masked_json`] turns any `Serialize` value into JSON,
//! runs it through a [`MaskedFields`] set, and wraps the result in
//! [`MaskedJson`], which `slog` emits as a nested value. Only the masked copy is
//! kept, so the logger never sees the original strings.
//!
//! Logging stays infallible: a value that has no JSON form is logged as
//! [`SERIALIZATION_FAILED`]. Which fields count as sensitive is decided by the
//! caller's field set, not here.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::masking::MaskedFields;

/// Placeholder logged when a value cannot be converted to JSON.
pub const SERIALIZATION_FAILED: &str = "Failed to serialize masked value";

/// A `slog::Value` that emits an already-masked payload as structured JSON.
pub struct MaskedJson {
    value: JsonValue,
}

impl MaskedJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }

    /// The masked payload that will be logged.
    pub fn as_json(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts values into a `slog::Value` that logs their masked form as JSON.
///
/// The value is converted to JSON, masked with `fields`, and stored. The
/// unmasked JSON is dropped before anything reaches the logger.
///
/// ## Example
/// ```ignore
/// use maskify::slog::IntoMaskedJson;
///
/// info!(logger, "loaded config"; "config" => config.into_masked_json(&fields));
/// ```
pub trait IntoMaskedJson: Serialize + Sized {
    /// Masks `self` with `fields` and returns a `slog::Value`.
    ///
    /// If `self` cannot be converted into `serde_json::Value`, the returned
    /// value holds the string [`SERIALIZATION_FAILED`].
    fn into_masked_json(self, fields: &MaskedFields) -> MaskedJson {
        let json_value = serde_json::to_value(&self).map_or_else(
            |_| JsonValue::String(SERIALIZATION_FAILED.to_string()),
            |value| fields.mask_json(value),
        );
        MaskedJson::new(json_value)
    }
}

impl<T> IntoMaskedJson for T where T: Serialize {}
