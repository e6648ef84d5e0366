//! Masking strategies for string values.
//!
//! Strategies are pure string transformations. They do not look at field
//! names, traverse structures, or inspect environment references.

/// Symbol written in place of every hidden character.
pub const MASK_CHAR: char = '*';

/// Tokens at least this long reveal [`LONG_REVEAL_LENGTH`] trailing characters.
pub const LONG_TOKEN_LENGTH: usize = 12;

/// Tokens at least this long (and shorter than [`LONG_TOKEN_LENGTH`]) reveal
/// [`SHORT_REVEAL_LENGTH`] trailing characters.
pub const SHORT_TOKEN_LENGTH: usize = 6;

/// Trailing characters left visible on long tokens.
pub const LONG_REVEAL_LENGTH: usize = 4;

/// Trailing characters left visible on short tokens.
pub const SHORT_REVEAL_LENGTH: usize = 2;

/// A masking algorithm for sensitive strings.
///
/// Both strategies operate on Unicode scalar values, are length-preserving,
/// and map the empty string to the empty string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaskStrategy {
    /// Reveals a short suffix so tokens stay distinguishable in logs.
    ///
    /// - 12 or more characters: the last 4 stay visible.
    /// - 6 to 11 characters: the last 2 stay visible.
    /// - fewer than 6 characters: everything is masked.
    Token,
    /// Masks every character.
    Password,
}

impl MaskStrategy {
    /// Number of trailing characters this strategy leaves visible for an
    /// input of `len` characters.
    #[must_use]
    pub fn reveal_len(self, len: usize) -> usize {
        match self {
            MaskStrategy::Password => 0,
            MaskStrategy::Token if len >= LONG_TOKEN_LENGTH => LONG_REVEAL_LENGTH,
            MaskStrategy::Token if len >= SHORT_TOKEN_LENGTH => SHORT_REVEAL_LENGTH,
            MaskStrategy::Token => 0,
        }
    }

    /// Applies the strategy to `value`.
    ///
    /// This method is total (it does not return errors).
    #[must_use]
    pub fn mask_value(self, value: &str) -> String {
        let mut chars: Vec<char> = value.chars().collect();
        let total = chars.len();
        let hidden = total - self.reveal_len(total);
        chars[..hidden].fill(MASK_CHAR);
        chars.into_iter().collect()
    }
}
