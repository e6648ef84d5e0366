//! Recursive descent over [`Value`] trees.
//!
//! Only mappings and sequences are entered. Strings reached here are leaves of
//! a container and are changed solely by a binding match on their parent
//! mapping, which has already happened by the time the walk descends.

use super::field::MaskedFields;
use crate::value::Value;

/// Applies `fields` to every mapping reachable from `value`.
pub(crate) fn mask_nested(fields: &MaskedFields, value: &mut Value) {
    match value {
        Value::Mapping(mapping) => {
            fields.mask_keys(mapping);
            for child in mapping.values_mut() {
                mask_nested(fields, child);
            }
        }
        Value::Sequence(items) => {
            for item in items {
                mask_nested(fields, item);
            }
        }
        Value::String(_) | Value::Scalar(_) => {}
    }
}
