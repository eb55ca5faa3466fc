mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use config::Settings;
use routes::{handle_json_payload_error, AppState};
use services::{AuthService, HealthQaBot, QaModel, SymptomClassifier, SymptomModel, UploadStore};
use std::sync::Arc;
use tracing::{error, info};

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

    info!("Starting AI health backend...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Load both model artifacts up front; requests only ever read them
    let qa_bot: Arc<dyn QaModel> = Arc::new(
        HealthQaBot::load(&settings.models.qa_model_dir).unwrap_or_else(|e| {
            error!("Failed to load Q&A model: {}", e);
            panic!("Q&A model error: {}", e);
        }),
    );

    info!("Q&A model initialized from {}", settings.models.qa_model_dir);

    let symptom_checker: Arc<dyn SymptomModel> = Arc::new(
        SymptomClassifier::load(&settings.models.classifier_path).unwrap_or_else(|e| {
            error!("Failed to load symptom classifier: {}", e);
            panic!("Symptom classifier error: {}", e);
        }),
    );

    info!(
        "Symptom classifier initialized from {}",
        settings.models.classifier_path
    );

    let uploads = Arc::new(UploadStore::new(&settings.upload.dir).unwrap_or_else(|e| {
        error!("Failed to prepare upload directory: {}", e);
        panic!("Upload directory error: {}", e);
    }));

    info!("Upload directory ready at {}", settings.upload.dir);

    let auth = AuthService::new(settings.auth.clone());

    // Build application state
    let app_state = AppState {
        qa_bot,
        symptom_checker,
        uploads,
        auth,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        // Demo mode: every origin, method and header is allowed so the
        // frontend can integrate from anywhere. Lock this down before
        // exposing the service publicly.
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
