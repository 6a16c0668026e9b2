use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod app;
mod model;
mod service;

use app::AppState;
use model::Config;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr();

    let state = AppState::new(config).expect("Failed to initialize application state");

    let config_data = web::Data::new(state.config.clone());
    let letter_data = web::Data::new(state.letter_service.clone());
    let chat_data = web::Data::from(state.chat_service.clone());
    let allowed_origins = state.config.allowed_origins.clone();

    tracing::info!(
        environment = %state.config.environment,
        "Starting DV support service on {}",
        bind_addr
    );

    HttpServer::new(move || {
        // Preflight OPTIONS requests are answered by this middleware
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600);
        for origin in &allowed_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .wrap(cors)
            .app_data(config_data.clone())
            .app_data(letter_data.clone())
            .app_data(chat_data.clone())
            .configure(api::complaint::configure)
            .configure(api::chat::configure)
            .configure(api::health::configure)
            .configure(api::openapi::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
