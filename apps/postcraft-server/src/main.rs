//! # Postcraft Server
//!
//! Serves the event post composer: an HTML form that turns event details
//! into an Instagram caption and an X post, plus the session's post history.

use actix_web::middleware::from_fn;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod controller;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;
mod views;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Postcraft on http://{}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config.clipboard);

    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(observability::echo_request_id))
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
