use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use super::{validation_failed, AppState};
use crate::models::{
    ErrorResponse, QuestionRequest, QuestionResponse, SymptomRequest, SymptomResponse,
};

/// Configure the model-backed routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/ask-healthbot", web::post().to(ask_health_bot))
        .route("/analyze-symptoms", web::post().to(analyze_symptoms));
}

/// Health Q&A endpoint
///
/// POST /ask-healthbot
///
/// Request body:
/// ```json
/// { "question": "string" }
/// ```
async fn ask_health_bot(
    state: web::Data<AppState>,
    req: web::Json<QuestionRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    tracing::info!(question_chars = req.question.len(), "Answering health question");

    match state.qa_bot.answer(&req.question) {
        Ok(answer) => HttpResponse::Ok().json(QuestionResponse { answer }),
        Err(e) => {
            tracing::error!("Q&A inference failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Inference failed".to_string(),
                message: "The health bot could not answer this question".to_string(),
                status_code: 500,
            })
        }
    }
}

/// Symptom analysis endpoint
///
/// POST /analyze-symptoms
///
/// Request body:
/// ```json
/// { "symptoms": "string" }
/// ```
async fn analyze_symptoms(
    state: web::Data<AppState>,
    req: web::Json<SymptomRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    tracing::info!(symptom_chars = req.symptoms.len(), "Classifying symptoms");

    match state.symptom_checker.predict(&req.symptoms) {
        Ok(possible_condition) => HttpResponse::Ok().json(SymptomResponse { possible_condition }),
        Err(e) => {
            tracing::error!("Symptom classification failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Inference failed".to_string(),
                message: "The symptom checker could not classify this input".to_string(),
                status_code: 500,
            })
        }
    }
}
