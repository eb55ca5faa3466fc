// Route exports
pub mod auth;
pub mod chatbot;
pub mod upload;

use actix_web::{error, http::StatusCode, web, HttpResponse, Responder};
use std::sync::Arc;

use crate::models::{ErrorResponse, StatusResponse};
use crate::services::{AuthService, QaModel, SymptomModel, UploadStore};

/// Application state shared across all handlers
///
/// The model adapters are constructed once at startup and injected here
/// as trait objects; handlers never reach for process globals.
#[derive(Clone)]
pub struct AppState {
    pub qa_bot: Arc<dyn QaModel>,
    pub symptom_checker: Arc<dyn SymptomModel>,
    pub uploads: Arc<UploadStore>,
    pub auth: AuthService,
}

/// Configure all routes at the application root
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status))
        .configure(auth::configure)
        .configure(chatbot::configure)
        .configure(upload::configure);
}

/// Liveness endpoint
///
/// GET / — fixed payload, independent of model load state.
async fn status() -> impl Responder {
    HttpResponse::Ok().json(StatusResponse {
        status: "API is running".to_string(),
    })
}

/// 422 response for requests that deserialized but failed field validation
pub(crate) fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    tracing::info!("Request validation failed: {}", errors);
    HttpResponse::UnprocessableEntity().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 422,
    })
}

/// JSON error response for malformed request bodies
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::UNPROCESSABLE_ENTITY),
        )
        .content_type("application/json")
        .json(self)
    }
}

/// Map JSON payload errors (missing or mistyped fields, invalid JSON) to 422
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "validation_failed".to_string(),
        message: format!("Invalid request body: {}", err),
        status_code: 422,
    }
    .into()
}
