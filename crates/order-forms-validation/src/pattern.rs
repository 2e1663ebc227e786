// File: src/pattern.rs
// Purpose: Regex based validators (email, numeric, custom patterns)

use once_cell::sync::Lazy;
use regex::Regex;

/// Email pattern used by the checkout form.
///
/// The local part is either a dot-separated run of atoms or a quoted string.
/// Consecutive dots are only possible inside the quoted form. The domain needs
/// at least one dot and a final label of two or more characters.
///
/// Whitespace and line terminators follow browser regex semantics: the
/// whitespace set includes U+FEFF but not U+0085, and the quoted form stops at
/// `\r`, U+2028 and U+2029. Length is in UTF-16 code units, so a single
/// astral character is a valid final label.
pub const EMAIL_PATTERN: &str = r#"^(([^<>()\[\]\.,;:\t\n\x0B\x0C\r\x20\xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@"]+(\.[^<>()\[\]\.,;:\t\n\x0B\x0C\r\x20\xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@"]+)*)|("[^\n\r\x{2028}\x{2029}]+"))@(([^<>()\[\]\.,;:\t\n\x0B\x0C\r\x20\xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@"]+\.)+(?:[^<>()\[\]\.,;:\t\n\x0B\x0C\r\x20\xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@"]{2,}|[\x{10000}-\x{10FFFF}]))$"#;

/// Zero or more ASCII digits. Matches the empty string on purpose.
pub const NUMERIC_PATTERN: &str = r"^[0-9]*$";

// Both patterns are literals, compilation cannot fail at runtime.
pub static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| anchored(EMAIL_PATTERN).expect("email pattern is valid"));

pub static NUMERIC_REGEX: Lazy<Regex> =
    Lazy::new(|| anchored(NUMERIC_PATTERN).expect("numeric pattern is valid"));

/// Compile a pattern so that it only accepts full matches
pub fn anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{})$", pattern))
}

/// Check if the whole value matches the regex
///
/// The regex is expected to come from [`anchored`]; a partial match on an
/// unanchored regex is still rejected.
pub fn matches_full(regex: &Regex, value: &str) -> bool {
    regex
        .find(value)
        .map(|m| m.start() == 0 && m.end() == value.len())
        .unwrap_or(false)
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    matches_full(&EMAIL_REGEX, email)
}

/// Validate that a value only contains decimal digits
pub fn is_numeric(value: &str) -> bool {
    matches_full(&NUMERIC_REGEX, value)
}
