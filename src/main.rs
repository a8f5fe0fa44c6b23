mod api;
mod config;
mod ledger;

use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use log::info;

use api::AppState;
use config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::init();

    let Config {
        host,
        port,
        difficulty,
    } = Config::from_env();

    println!("⛓️ Starting LaboonCoin ledger at http://{host}:{port}");
    info!("mining difficulty {}", difficulty);

    let state = web::Data::new(AppState::new(difficulty));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
