//! Field masking: strategies, bindings, and traversal.
//!
//! - **`strategy`**: how a single string is masked (`MaskStrategy`)
//! - **`field`**: which fields are masked (`MaskedField`, `MaskedFields`)
//! - **`walk`**: the recursive descent that applies a field set to a tree
//! - **`env`**: the `${NAME}` guard that exempts environment references

mod env;
mod field;
mod strategy;
mod walk;

pub use env::is_env_reference;
pub use field::{MaskedField, MaskedFields};
pub use strategy::{
    MaskStrategy, LONG_REVEAL_LENGTH, LONG_TOKEN_LENGTH, MASK_CHAR, SHORT_REVEAL_LENGTH,
    SHORT_TOKEN_LENGTH,
};
