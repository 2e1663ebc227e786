//! String validation functions

/// Length of a value as the browser form sees it: UTF-16 code units, so a
/// character outside the Basic Multilingual Plane counts twice
pub fn char_length(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Checks that a value has content once surrounding whitespace is ignored
pub fn is_present(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Validates minimum string length
pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if char_length(s) >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters", min))
    }
}

/// Exact equality: case-sensitive, no trimming
pub fn equals(value: &str, expected: &str) -> bool {
    value == expected
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", false)]
    #[case("   ", false)]
    #[case("\t\n", false)]
    #[case("a", true)]
    #[case("  a  ", true)]
    fn test_is_present(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_present(value), expected);
    }

    #[test]
    fn test_min_length() {
        assert!(validate_min_length("hello", 5).is_ok());
        assert!(validate_min_length("hell", 5).is_err());
        assert_eq!(
            validate_min_length("hi", 3).unwrap_err(),
            "Must be at least 3 characters"
        );
    }

    #[rstest]
    #[case("S\u{e3}o", 3)]
    #[case("Jos\u{e9}!", 5)]
    #[case("\u{1F600}", 2)]
    #[case("\u{1F600}\u{1F600}\u{1F600}", 6)]
    fn test_char_length_counts_utf16_units(#[case] value: &str, #[case] expected: usize) {
        assert_eq!(char_length(value), expected);
    }

    #[test]
    fn test_min_length_counts_utf16_units() {
        // 5 code units, 6 bytes
        assert!(validate_min_length("Jos\u{e9}!", 5).is_ok());
        // 3 emoji, 6 code units
        assert!(validate_min_length("\u{1F600}\u{1F600}\u{1F600}", 5).is_ok());
        assert!(validate_min_length("\u{1F600}\u{1F600}", 5).is_err());
    }

    #[test]
    fn test_equality() {
        assert!(equals("x@y.com", "x@y.com"));
        assert!(!equals("x@y.com", "X@y.com"));
        assert!(!equals("x@y.com", "x@y.com "));
    }
}
