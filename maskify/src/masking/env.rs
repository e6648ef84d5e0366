//! Detection of environment-variable placeholders.

/// Returns `true` when `value` looks like an environment reference such as
/// `${AWS_ACCESS_KEY_ID}`.
///
/// Such values name a secret that is resolved later; they are not the secret
/// itself. Field-set masking leaves them untouched when they are reached
/// through a mapping key.
#[must_use]
pub fn is_env_reference(value: &str) -> bool {
    value.starts_with("${") && value.ends_with('}')
}

#[cfg(test)]
mod tests {
    use super::is_env_reference;

    #[test]
    fn detects_braced_references() {
        assert!(is_env_reference("${AWS_ACCESS_KEY_ID}"));
        assert!(is_env_reference("${}"));
        assert!(is_env_reference("${A}"));
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(!is_env_reference("$AWS_ACCESS_KEY_ID"));
        assert!(!is_env_reference("${AWS_ACCESS_KEY_ID"));
        assert!(!is_env_reference("AWS_ACCESS_KEY_ID}"));
        assert!(!is_env_reference("prefix ${VAR}"));
        assert!(!is_env_reference(""));
    }

    #[test]
    fn unclosed_marker_is_not_a_reference() {
        assert!(!is_env_reference("${"));
        assert!(!is_env_reference("$"));
    }
}
