pub mod block;
pub mod hash;
pub mod miner;
pub mod model;

pub use block::{create_block, hex8, leading_zero_digits, valid_hash};
pub use hash::hash;
pub use miner::mine;
pub use model::Ledger;

/// Digest of the empty string, and the starting accumulator for every hash.
pub const HASH_SEED: i32 = 10_000_000;

/// Hex digits in a rendered 32-bit value.
pub const HEX_WIDTH: usize = 8;

/// A 32-bit hash has at most 8 leading hex zeros.
pub const MAX_DIFFICULTY: i32 = 8;

/// Default Proof-of-Work difficulty (number of leading hex zeros).
pub const DEFAULT_DIFFICULTY: i32 = 3;

/// Difficulty bounds accepted at runtime (keep low in dev to avoid long waits)
pub const DIFF_MIN: i32 = 0;
pub const DIFF_MAX: i32 = 6;
