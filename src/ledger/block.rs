use super::{HEX_WIDTH, MAX_DIFFICULTY};

/// Render a 32-bit value as 8 lowercase hex digits (two's complement for
/// negatives, no prefix).
pub fn hex8(value: i32) -> String {
    format!("{:0width$x}", value, width = HEX_WIDTH)
}

/// Format one block record: `label|prev|nonce|hash`.
///
/// The label goes in verbatim. A label holding `|` or a line break will
/// break the record layout; callers that care must reject it themselves.
pub fn create_block(label: &str, previous_hash: i32, nonce: i32, hash: i32) -> String {
    format!(
        "{}|{}|{}|{}",
        label,
        hex8(previous_hash),
        hex8(nonce),
        hex8(hash)
    )
}

/// Number of leading `'0'` digits in the 8-digit hex rendering of `hash`.
pub fn leading_zero_digits(hash: i32) -> u32 {
    (hash as u32).leading_zeros() / 4
}

/// Proof-of-Work predicate: at least `difficulty` leading hex zeros.
///
/// Non-positive difficulty always passes; anything above
/// [`MAX_DIFFICULTY`] can never be met by a 32-bit hash.
pub fn valid_hash(difficulty: i32, hash: i32) -> bool {
    if difficulty <= 0 {
        return true;
    }
    if difficulty > MAX_DIFFICULTY {
        return false;
    }
    leading_zero_digits(hash) >= difficulty as u32
}
