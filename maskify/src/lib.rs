//! Mask named fields in decoded documents before they are logged.
//!
//! This crate separates:
//! - **Strategy**: how a sensitive string is masked ([`MaskStrategy`]).
//! - **Binding**: which field names are masked with which strategy
//!   ([`MaskedField`], collected into [`MaskedFields`]).
//!
//! A field set walks a generic [`Value`] tree (mappings, sequences, strings,
//! scalars) and masks matching string fields at any depth:
//!
//! ```rust
//! use maskify::{MaskedField, MaskedFields, Value};
//!
//! let fields = MaskedFields::new(vec![
//!     MaskedField::password("password"),
//!     MaskedField::token("secret_access_key"),
//! ]);
//!
//! let mut doc: Value = [
//!     ("password".to_string(), Value::from("password123")),
//!     ("secret_access_key".to_string(), Value::from("${AWS_SECRET}")),
//! ]
//! .into_iter()
//! .collect();
//!
//! fields.mask(&mut doc);
//!
//! assert_eq!(doc.get("password").and_then(Value::as_str), Some("***********"));
//! // Environment references are not secrets yet and stay readable.
//! assert_eq!(doc.get("secret_access_key").and_then(Value::as_str), Some("${AWS_SECRET}"));
//! ```
//!
//! Key rules:
//! - Field names match mapping keys exactly; there are no paths or wildcards.
//! - Only string values are masked; other values under a matched key are left alone.
//! - Calling `mask` on a bare string applies *every* strategy in the set, in
//!   order, since a bare string has no field name to match.
//!
//! What this crate does not do:
//! - parse or emit any serialization format (decode into [`Value`] with your
//!   format crate, or use the `json` conversions)
//! - hash, encrypt, or otherwise reversibly redact values
//! - report which fields were found
//!
//! Integrations live behind feature flags: `serde`, `json` (default), `slog`.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod masking;
#[cfg(feature = "slog")]
pub mod slog;
mod value;

// Re-exports
pub use masking::{
    is_env_reference, MaskStrategy, MaskedField, MaskedFields, LONG_REVEAL_LENGTH,
    LONG_TOKEN_LENGTH, MASK_CHAR, SHORT_REVEAL_LENGTH, SHORT_TOKEN_LENGTH,
};
pub use value::{Mapping, Scalar, Value};
