use std::env;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use villa_booking_api::catalog::Catalog;
use villa_booking_api::routes;
use villa_booking_api::services::booking_service::BookingService;
use villa_booking_api::state::AppState;
use villa_booking_api::storage::FileStore;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const DEFAULT_WHATSAPP_NUMBER: &str = "6281234567890";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let host = env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    let whatsapp_number =
        env::var("WHATSAPP_NUMBER").unwrap_or_else(|_| DEFAULT_WHATSAPP_NUMBER.to_string());

    let store = FileStore::from_env();
    log::info!("Booking storage at {}", store.path().display());
    let ledger = match BookingService::open(Box::new(store)) {
        Ok(ledger) => {
            log::info!("Loaded {} booking(s)", ledger.all().len());
            ledger
        }
        Err(e) => {
            // A corrupt or unreadable ledger must not keep the site down
            log::warn!("Failed to load booking storage, starting empty: {e}");
            BookingService::empty(Box::new(FileStore::from_env()))
        }
    };

    let state = web::Data::new(AppState::new(Catalog::seed(), ledger, whatsapp_number));

    log::info!("Starting HTTP server on {host}:{port}");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(state.clone())
            .route("/health", web::get().to(|| async { "OK" }))
            .configure(routes::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
