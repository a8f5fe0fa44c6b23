use crate::ledger::{DEFAULT_DIFFICULTY, Ledger};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Shared application state: one in-memory ledger plus the mining cursor.
///
/// Lock order when more than one is needed: `ledger`, then `tip`.
pub struct AppState {
    pub ledger: Mutex<Ledger>,
    /// Hash of the last block mined through the API (0 before the first).
    pub tip: Mutex<i32>,
    pub difficulty: Mutex<i32>,
}

impl AppState {
    pub fn new(difficulty: i32) -> Self {
        Self {
            ledger: Mutex::new(Ledger::new()),
            tip: Mutex::new(0),
            difficulty: Mutex::new(difficulty),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_DIFFICULTY)
    }
}

/* ---------- Hashing API Models ---------- */

#[derive(Deserialize)]
pub struct HashRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct HashResponse {
    pub text: String,
    pub hash: i32,
    pub hex: String,
}

#[derive(Deserialize)]
pub struct BlockRequest {
    pub label: String,
    pub previous_hash: i32,
    pub nonce: i32,
    pub hash: i32,
}

#[derive(Serialize)]
pub struct BlockResponse {
    pub block: String,
}

#[derive(Deserialize)]
pub struct ValidateRequest {
    pub difficulty: i32,
    pub hash: i32,
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub leading_zeros: u32,
    pub difficulty: i32,
}

/* ---------- Chain API Models ---------- */

#[derive(Deserialize)]
pub struct AppendRequest {
    pub record: String,
}

#[derive(Serialize)]
pub struct AppendResponse {
    pub length: usize,
}

#[derive(Deserialize)]
pub struct MineRequest {
    pub label: String,
}

#[derive(Serialize)]
pub struct MineResponse {
    pub block: String,
    pub index: usize,
    pub previous_hash: String,
    pub nonce: String,
    pub hash: String,
    pub difficulty: i32,
    pub attempts: u64,
}

#[derive(Serialize)]
pub struct DifficultyResponse {
    pub difficulty: i32,
}

#[derive(Deserialize)]
pub struct SetDifficultyRequest {
    pub difficulty: i32,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub length: usize,
    pub empty: bool,
    pub last_block: Option<String>,
    pub difficulty: i32,
    pub tip: String,
}
