use actix_web::{HttpResponse, Responder, get, web};

use super::models::{AppState, StatsResponse};
use crate::ledger::hex8;

#[get("/stats/")]
pub async fn get_stats(state: web::Data<AppState>) -> impl Responder {
    // Same lock order as the miner: ledger, then tip
    let (length, empty, last_block, tip) = {
        let ledger = state.ledger.lock().expect("mutex poisoned");
        let tip = state.tip.lock().expect("mutex poisoned");
        (
            ledger.len(),
            ledger.is_empty(),
            ledger.records().last().cloned(),
            *tip,
        )
    };
    let difficulty = *state.difficulty.lock().expect("mutex poisoned");

    HttpResponse::Ok().json(StatsResponse {
        length,
        empty,
        last_block,
        difficulty,
        tip: hex8(tip),
    })
}
