use actix_web::{HttpResponse, Responder, post, web};
use log::debug;

use super::models::{
    BlockRequest, BlockResponse, HashRequest, HashResponse, ValidateRequest, ValidateResponse,
};
use crate::ledger::{create_block, hash, hex8, leading_zero_digits, valid_hash};

/// Hash arbitrary text with the ledger's toy digest.
#[post("/hash/")]
pub async fn post_hash(body: web::Json<HashRequest>) -> impl Responder {
    let HashRequest { text } = body.into_inner();
    let digest = hash(&text);
    debug!("HASH - {} chars -> {}", text.chars().count(), hex8(digest));
    HttpResponse::Ok().json(HashResponse {
        text,
        hash: digest,
        hex: hex8(digest),
    })
}

/// Format a block record without touching the ledger.
#[post("/block/")]
pub async fn post_block(body: web::Json<BlockRequest>) -> impl Responder {
    let block = create_block(&body.label, body.previous_hash, body.nonce, body.hash);
    HttpResponse::Ok().json(BlockResponse { block })
}

/// Check a hash against an arbitrary difficulty.
#[post("/validate/")]
pub async fn post_validate(body: web::Json<ValidateRequest>) -> impl Responder {
    HttpResponse::Ok().json(ValidateResponse {
        valid: valid_hash(body.difficulty, body.hash),
        leading_zeros: leading_zero_digits(body.hash),
        difficulty: body.difficulty,
    })
}
