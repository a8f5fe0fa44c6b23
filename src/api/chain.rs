use crate::ledger::miner::MinedBlock;
use crate::ledger::{DIFF_MAX, DIFF_MIN, hex8, mine};
use actix_web::{HttpResponse, Responder, get, post, web};
use log::{debug, info, warn};

use super::models::{
    AppendRequest, AppendResponse, AppState, DifficultyResponse, MineRequest, MineResponse,
    SetDifficultyRequest,
};

/// Render the whole ledger, one record per line.
#[get("/chain/")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(ledger.render())
}

/// Append a raw record. No format or linkage validation; the tip is left alone.
#[post("/chain/")]
pub async fn append_record(
    state: web::Data<AppState>,
    body: web::Json<AppendRequest>,
) -> impl Responder {
    let mut ledger = state.ledger.lock().expect("mutex poisoned");
    ledger.append(body.into_inner().record);
    debug!("CHAIN - raw record appended, length now {}", ledger.len());
    HttpResponse::Ok().json(AppendResponse {
        length: ledger.len(),
    })
}

/// Mine a new block on top of the current tip:
/// - Validate the label so the record stays one well-formed line
/// - Snapshot the tip and search for a nonce off the async workers, no locks held
/// - Re-check the tip, then append the record and advance it
#[post("/mine/")]
pub async fn mine_block(state: web::Data<AppState>, req: web::Json<MineRequest>) -> impl Responder {
    let label = match validate_label(&req.label) {
        Ok(l) => l.to_string(),
        Err(msg) => {
            warn!("MINER - rejected label {:?}: {}", req.label, msg);
            return HttpResponse::BadRequest().body(msg);
        }
    };

    let difficulty = *state.difficulty.lock().expect("mutex poisoned");
    let previous_hash = *state.tip.lock().expect("mutex poisoned");

    let search_label = label.clone();
    let mined = match web::block(move || mine(&search_label, previous_hash, difficulty)).await {
        Ok(Some(mined)) => mined,
        Ok(None) => {
            warn!(
                "MINER - nonce space exhausted for {:?} (diff={})",
                label, difficulty
            );
            return HttpResponse::UnprocessableEntity().body("no nonce satisfies difficulty");
        }
        Err(e) => {
            warn!("MINER - search for {:?} failed: {}", label, e);
            return HttpResponse::InternalServerError().body("mining task failed");
        }
    };

    let index = match seal_block(&state, previous_hash, &mined) {
        Ok(index) => index,
        Err(msg) => {
            warn!("MINER - stale search for {:?}: {}", label, msg);
            return HttpResponse::Conflict().body(msg);
        }
    };

    info!(
        "MINER - sealed block #{} (hash={}, nonce={}, attempts={})",
        index,
        hex8(mined.hash),
        hex8(mined.nonce),
        mined.attempts
    );

    HttpResponse::Ok().json(MineResponse {
        block: mined.record,
        index,
        previous_hash: hex8(previous_hash),
        nonce: hex8(mined.nonce),
        hash: hex8(mined.hash),
        difficulty,
        attempts: mined.attempts,
    })
}

/// Get current PoW difficulty.
#[get("/difficulty/")]
pub async fn get_difficulty(state: web::Data<AppState>) -> impl Responder {
    let difficulty = *state.difficulty.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(DifficultyResponse { difficulty })
}

/// Update PoW difficulty (affects future mining only).
#[post("/difficulty/")]
pub async fn set_difficulty(
    state: web::Data<AppState>,
    body: web::Json<SetDifficultyRequest>,
) -> impl Responder {
    if !(DIFF_MIN..=DIFF_MAX).contains(&body.difficulty) {
        warn!("DIFFICULTY - rejected {}", body.difficulty);
        return HttpResponse::BadRequest().body("difficulty out of range for dev mode (0..=6)");
    }
    let mut difficulty = state.difficulty.lock().expect("mutex poisoned");
    *difficulty = body.difficulty;
    info!("DIFFICULTY - set to {}", *difficulty);
    HttpResponse::Ok().json(DifficultyResponse {
        difficulty: *difficulty,
    })
}

/* -------------------- Helpers -------------------- */

/// Append a freshly mined block if the tip is still the one it was mined on.
/// Returns the new block's index.
fn seal_block(
    state: &AppState,
    previous_hash: i32,
    mined: &MinedBlock,
) -> Result<usize, &'static str> {
    let mut ledger = state.ledger.lock().expect("mutex poisoned");
    let mut tip = state.tip.lock().expect("mutex poisoned");
    if *tip != previous_hash {
        return Err("tip moved while mining; retry");
    }
    ledger.append(mined.record.clone());
    *tip = mined.hash;
    Ok(ledger.len() - 1)
}

/// Labels are written verbatim into a `|`-delimited line.
fn validate_label(label: &str) -> Result<&str, &'static str> {
    let label = label.trim();
    if label.is_empty() {
        return Err("label required");
    }
    if label.contains('|') {
        return Err("label must not contain '|'");
    }
    if label.contains(['\n', '\r']) {
        return Err("label must be a single line");
    }
    Ok(label)
}
