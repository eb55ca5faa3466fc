use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use super::{validation_failed, AppState};
use crate::models::AuthRequest;

/// Configure the auth routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/login", web::post().to(login))
        .route("/signup", web::post().to(signup));
}

/// Login endpoint
///
/// POST /login
///
/// Checks the credentials against the configured demo pair. A mismatch
/// returns HTTP 200 with `{"error": "Invalid credentials"}` — the
/// contract the frontend integrates against, kept as-is.
async fn login(state: web::Data<AppState>, req: web::Json<AuthRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    HttpResponse::Ok().json(state.auth.login(&req.email, &req.password))
}

/// Signup endpoint
///
/// POST /signup — acknowledges with an echo of the email; nothing is
/// persisted.
async fn signup(state: web::Data<AppState>, req: web::Json<AuthRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    HttpResponse::Ok().json(state.auth.signup(&req.email))
}
