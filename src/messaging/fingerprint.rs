//! Deterministic message fingerprint derivation.

/// Sentinel returned when a fingerprint cannot be derived.
pub const INVALID_HASH: &str = "INVALID_HASH";

/// Minimum message-ID length needed for the two-character prefix.
const MIN_ID_LEN: usize = 2;

/// Derive a message fingerprint from an ID, a batch index, and content.
///
/// Format: the first two characters of the ID, a colon, the decimal index,
/// a colon, then the uppercased first and last words of the trimmed content
/// concatenated with no separator. A single-word content uses that word
/// twice.
///
/// Returns [`INVALID_HASH`] when the ID is shorter than two characters or
/// the content is empty after trimming. Pure function: identical inputs
/// always produce identical output.
pub fn derive_fingerprint(id: &str, index: usize, content: &str) -> String {
    let trimmed = content.trim();
    if id.chars().count() < MIN_ID_LEN || trimmed.is_empty() {
        return INVALID_HASH.to_owned();
    }

    let first_two: String = id.chars().take(MIN_ID_LEN).collect();

    let mut words = trimmed.split_whitespace();
    let first = match words.next() {
        Some(w) => w.to_uppercase(),
        None => return INVALID_HASH.to_owned(),
    };
    let last = words.next_back().map_or_else(|| first.clone(), str::to_uppercase);

    format!("{first_two}:{index}:{first}{last}")
}
