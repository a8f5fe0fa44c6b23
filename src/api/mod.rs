mod chain;
mod hashing;
mod health;
pub mod models;
mod stats;

use actix_web::web::{self, ServiceConfig};

pub use models::AppState;

pub fn init_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(health::health_check)
            .service(hashing::post_hash)
            .service(hashing::post_block)
            .service(hashing::post_validate)
            .service(chain::get_chain)
            .service(chain::append_record)
            .service(chain::mine_block)
            .service(chain::get_difficulty)
            .service(chain::set_difficulty)
            .service(stats::get_stats),
    );
}
