use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use tracing::{error, info};

use campus_rideshare::config::Settings;
use campus_rideshare::core::Recommender;
use campus_rideshare::error::{handle_json_payload_error, handle_query_payload_error};
use campus_rideshare::models::{CompatibilityWeights, PaymentParams};
use campus_rideshare::routes::{configure_routes, AppState};
use campus_rideshare::store::Store;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Campus Rideshare coordination service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize the recommender with configured weights
    let weights = CompatibilityWeights {
        location: settings.scoring.weights.location,
        driving_times: settings.scoring.weights.driving_times,
        major: settings.scoring.weights.major,
        extracurriculars: settings.scoring.weights.extracurriculars,
    };
    let recommender = Recommender::new(weights);

    info!("Recommender initialized with weights: {:?}", weights);

    let payment = PaymentParams {
        fuel_efficiency_mpg: settings.payment.fuel_efficiency_mpg,
        base_fare: settings.payment.base_fare,
        wear_rate_per_mile: settings.payment.wear_rate_per_mile,
    };

    // The store lives for the whole process; restart is the only reset
    let store = Arc::new(Store::new());

    // Build application state
    let app_state = AppState {
        store,
        recommender,
        payment,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
