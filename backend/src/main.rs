#[macro_use]
extern crate rocket;

mod api;
mod config;
mod error;
mod models;
mod services;
mod utils;

use crate::config::{create_app_state, create_cors, init_logger, load_environment, EnvSecretStore};
use crate::models::ScanConfig;
use crate::services::youtube_api::YoutubeApi;
use rocket::{Build, Rocket};

pub struct AppState {
    pub api: YoutubeApi,
    pub scan_config: ScanConfig,
}

pub fn build_rocket(state: AppState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount("/scan", routes![api::scan::scan, api::scan::scan_markdown])
        .mount("/config", routes![api::settings::get_config])
}

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    load_environment();
    init_logger();

    let state = create_app_state(&EnvSecretStore)?;
    let cors = create_cors()?;

    build_rocket(state)
        .attach(cors)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Rocket failed to launch: {e}"))?;
    Ok(())
}
