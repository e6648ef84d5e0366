//! Field-name bindings and the field set that applies them.
//!
//! A [`MaskedField`] ties one field name to one [`MaskStrategy`]. A
//! [`MaskedFields`] set is an ordered list of bindings, built once and reused
//! for any number of documents.

use std::slice;

use super::{env::is_env_reference, strategy::MaskStrategy, walk};
use crate::value::{Mapping, Value};

/// A field name bound to the strategy used to mask its value.
///
/// Bindings are immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MaskedField {
    name: String,
    strategy: MaskStrategy,
}

impl MaskedField {
    /// Binds `name` to `strategy`.
    #[must_use]
    pub fn new(name: impl Into<String>, strategy: MaskStrategy) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }

    /// Binds `name` to [`MaskStrategy::Password`].
    #[must_use]
    pub fn password(name: impl Into<String>) -> Self {
        Self::new(name, MaskStrategy::Password)
    }

    /// Binds `name` to [`MaskStrategy::Token`].
    #[must_use]
    pub fn token(name: impl Into<String>) -> Self {
        Self::new(name, MaskStrategy::Token)
    }

    /// The field name this binding matches.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The strategy applied to matched values.
    pub fn strategy(&self) -> MaskStrategy {
        self.strategy
    }

    /// Masks `value` with this binding's strategy, ignoring the field name.
    #[must_use]
    pub fn mask_value(&self, value: &str) -> String {
        self.strategy.mask_value(value)
    }

    /// Masks this field in `mapping`, without descending into nested values.
    ///
    /// Nothing happens when the key is absent, when its value is not a
    /// string, or when the string is an environment reference.
    pub fn mask(&self, mapping: &mut Mapping) {
        if let Some(Value::String(current)) = mapping.get_mut(&self.name) {
            if !is_env_reference(current) {
                *current = self.strategy.mask_value(current);
            }
        }
    }
}

/// An ordered set of [`MaskedField`] bindings.
///
/// Names are not required to be unique. [`MaskedFields::mask_value`] uses the
/// first binding with a matching name, while [`MaskedFields::mask`] applies
/// every binding in order, so a duplicated name masks the same value again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MaskedFields {
    fields: Vec<MaskedField>,
}

impl MaskedFields {
    /// Builds a field set from `fields`, keeping their order.
    #[must_use]
    pub fn new(fields: Vec<MaskedField>) -> Self {
        Self { fields }
    }

    /// Masks every bound field reachable from `value`, in place.
    ///
    /// - Mapping: each binding is tried against the mapping's own keys, then
    ///   every nested mapping and sequence is visited.
    /// - Sequence: every nested mapping and sequence is visited.
    /// - String: every strategy in the set is applied in order, regardless of
    ///   field names, and environment references are *not* exempted. A bare
    ///   string has no field name to match against; this path is only taken
    ///   when `value` itself is the string, never for strings nested inside a
    ///   container.
    /// - Other scalars are left unchanged.
    pub fn mask(&self, value: &mut Value) {
        match value {
            Value::String(current) => {
                *current = self
                    .fields
                    .iter()
                    .fold(std::mem::take(current), |acc, field| field.mask_value(&acc));
            }
            other => walk::mask_nested(self, other),
        }
    }

    /// Consumes `value` and returns its masked form.
    #[must_use]
    pub fn masked(&self, mut value: Value) -> Value {
        self.mask(&mut value);
        value
    }

    /// Masks a decoded JSON document.
    ///
    /// Equivalent to converting into [`Value`], calling [`MaskedFields::mask`],
    /// and converting back.
    #[cfg(feature = "json")]
    #[must_use]
    pub fn mask_json(&self, value: serde_json::Value) -> serde_json::Value {
        self.masked(Value::from(value)).into()
    }

    /// Masks `value` with the strategy of the first binding named `name`.
    ///
    /// Returns `value` unchanged when no binding matches.
    #[must_use]
    pub fn mask_value(&self, name: &str, value: &str) -> String {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map_or_else(|| value.to_owned(), |field| field.mask_value(value))
    }

    /// Applies every binding to the direct keys of `mapping`.
    pub(crate) fn mask_keys(&self, mapping: &mut Mapping) {
        for field in &self.fields {
            field.mask(mapping);
        }
    }

    /// Iterates over the bindings in order.
    pub fn iter(&self) -> slice::Iter<'_, MaskedField> {
        self.fields.iter()
    }

    /// Number of bindings, duplicates included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when the set has no bindings.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<MaskedField> for MaskedFields {
    fn from_iter<I: IntoIterator<Item = MaskedField>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<MaskedField>> for MaskedFields {
    fn from(fields: Vec<MaskedField>) -> Self {
        Self::new(fields)
    }
}

impl<'a> IntoIterator for &'a MaskedFields {
    type Item = &'a MaskedField;
    type IntoIter = slice::Iter<'a, MaskedField>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
