//! Random message identifier generation.

use rand::Rng;

/// Length of a generated message ID in decimal digits.
const ID_LEN: usize = 10;

/// Decimal digit alphabet for message IDs.
const DIGITS: &[u8] = b"0123456789";

/// Generate a random 10-digit message ID.
///
/// Each character is an independently chosen decimal digit from a
/// non-cryptographic source. No uniqueness check is performed against
/// previously generated identifiers; callers must not assume global
/// uniqueness.
pub fn generate_message_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..DIGITS.len());
            DIGITS[idx] as char
        })
        .collect()
}
