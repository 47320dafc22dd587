//! Recipient and content validation predicates.
//!
//! Pure pre-check functions. The loose recipient predicate is the documented
//! contract: it accepts strings as short as one character after the `+` and
//! does not require digits after the prefix. The strict international
//! predicate is opt-in for callers that want full numbers.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum recipient length in characters, `+` prefix included.
const MAX_RECIPIENT_LEN: usize = 10;

/// Maximum message content length in characters.
const MAX_CONTENT_LEN: usize = 250;

/// Full international number: `+27` followed by exactly nine digits.
static INTERNATIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+27\d{9}$").expect("international recipient pattern is valid")
});

/// Check that a recipient address is plausibly shaped.
///
/// True iff `text` is non-empty, starts with `'+'`, and is at most 10
/// characters long. Deliberately loose: `+1` passes, and non-digit
/// characters after the prefix are accepted.
pub fn is_valid_recipient(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    text.starts_with('+') && text.chars().count() <= MAX_RECIPIENT_LEN
}

/// Check that message content fits the length bound.
///
/// True iff `text` is at most 250 characters. The empty string is valid
/// under this predicate.
pub fn is_valid_content(text: &str) -> bool {
    text.chars().count() <= MAX_CONTENT_LEN
}

/// Check that a recipient is a full international number (`+27` + 9 digits).
///
/// Stricter than [`is_valid_recipient`]; callers that want complete numbers
/// check this instead of, not in addition to, the loose predicate.
pub fn is_international_recipient(text: &str) -> bool {
    INTERNATIONAL.is_match(text)
}
