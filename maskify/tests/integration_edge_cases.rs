//! Edge-case coverage for `MaskStrategy` string handling.
//!
//! These tests focus on behavior across Unicode scalar values (multi-byte
//! characters, combining marks) and on the length thresholds where the token
//! strategy changes how much it reveals.

use maskify::{
    MaskStrategy, LONG_REVEAL_LENGTH, LONG_TOKEN_LENGTH, MASK_CHAR, SHORT_REVEAL_LENGTH,
    SHORT_TOKEN_LENGTH,
};

fn expected_token(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let reveal = if chars.len() >= LONG_TOKEN_LENGTH {
        LONG_REVEAL_LENGTH
    } else if chars.len() >= SHORT_TOKEN_LENGTH {
        SHORT_REVEAL_LENGTH
    } else {
        0
    };
    let hidden = chars.len() - reveal;
    std::iter::repeat(MASK_CHAR)
        .take(hidden)
        .chain(chars[hidden..].iter().copied())
        .collect()
}

#[test]
fn test_empty_string() {
    assert_eq!(MaskStrategy::Token.mask_value(""), "");
    assert_eq!(MaskStrategy::Password.mask_value(""), "");
}

#[test]
fn test_every_length_up_to_thirty() {
    let source = "abcdefghijklmnopqrstuvwxyz0123";
    for len in 0..=source.len() {
        let value = &source[..len];

        let token = MaskStrategy::Token.mask_value(value);
        assert_eq!(token, expected_token(value), "token length {len}");
        assert_eq!(token.len(), len);

        let password = MaskStrategy::Password.mask_value(value);
        assert_eq!(password.len(), len);
        assert!(password.chars().all(|ch| ch == MASK_CHAR));
    }
}

#[test]
fn test_threshold_boundaries() {
    assert_eq!(MaskStrategy::Token.mask_value("abcde"), "*****");
    assert_eq!(MaskStrategy::Token.mask_value("abcdef"), "****ef");
    assert_eq!(MaskStrategy::Token.mask_value("abcdefghijk"), "*********jk");
    assert_eq!(MaskStrategy::Token.mask_value("abcdefghijkl"), "********ijkl");
}

#[test]
fn test_unicode_multibyte() {
    // Six Chinese characters (3 bytes each in UTF-8) count as six characters.
    let chinese = "秘密数据令牌";
    assert_eq!(MaskStrategy::Token.mask_value(chinese), "****令牌");
    assert_eq!(MaskStrategy::Password.mask_value(chinese), "******");
}

#[test]
fn test_unicode_emoji() {
    let emoji_string = "secret🔒data";
    assert_eq!(MaskStrategy::Token.mask_value(emoji_string), "*********ta");
    assert_eq!(MaskStrategy::Password.mask_value(emoji_string), "*".repeat(11));
}

#[test]
fn test_unicode_combining_characters() {
    // "é" as combining character (e + ◌́) is two scalar values.
    let combining = "cafe\u{0301}s";
    assert_eq!(MaskStrategy::Token.mask_value(combining), "****\u{0301}s");
}

#[test]
fn test_whitespace_only() {
    let spaces = "      ";
    assert_eq!(MaskStrategy::Token.mask_value(spaces), "****  ");
}

#[test]
fn test_very_long_string() {
    let long_string = "x".repeat(100_000);

    let result = MaskStrategy::Token.mask_value(&long_string);

    assert_eq!(result.len(), 100_000);
    assert!(result.starts_with(&"*".repeat(99_996)));
    assert!(result.ends_with("xxxx"));
}

#[test]
fn test_mask_char_in_input_is_kept_in_suffix() {
    assert_eq!(MaskStrategy::Token.mask_value("********ab**"), "********ab**");
}
