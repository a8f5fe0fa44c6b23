use log::debug;

use super::{MAX_DIFFICULTY, create_block, hash, hex8, valid_hash};

/// Result of a successful nonce search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinedBlock {
    pub nonce: i32,
    pub hash: i32,
    /// Number of candidate hashes computed, including the winning one.
    pub attempts: u64,
    /// Formatted record, ready to append to a ledger.
    pub record: String,
}

/// Text hashed for a candidate nonce: previous hash and nonce as 8-digit
/// hex, then the label, with no separators.
pub fn mining_preimage(label: &str, previous_hash: i32, nonce: i32) -> String {
    format!("{}{}{}", hex8(previous_hash), hex8(nonce), label)
}

/// Perform Proof-of-Work by scanning nonces from 0 upward until the hash of
/// the preimage has `difficulty` leading hex zeros.
///
/// Returns `None` if no 32-bit nonce works (or `difficulty` is unreachable).
pub fn mine(label: &str, previous_hash: i32, difficulty: i32) -> Option<MinedBlock> {
    if difficulty > MAX_DIFFICULTY {
        return None;
    }

    let mut attempts: u64 = 0;
    for raw in 0..=u32::MAX {
        let nonce = raw as i32;
        attempts += 1;
        let candidate = hash(&mining_preimage(label, previous_hash, nonce));
        if valid_hash(difficulty, candidate) {
            debug!(
                "MINER - label={:?} nonce={} hash={} after {} attempts",
                label,
                hex8(nonce),
                hex8(candidate),
                attempts
            );
            return Some(MinedBlock {
                nonce,
                hash: candidate,
                attempts,
                record: create_block(label, previous_hash, nonce, candidate),
            });
        }
    }
    None
}
