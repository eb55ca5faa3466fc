use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use futures_util::StreamExt as _;

use super::AppState;
use crate::models::{ErrorResponse, UploadResponse};

/// Configure the upload routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/upload-report", web::post().to(upload_report));
}

/// Report upload endpoint
///
/// POST /upload-report
///
/// Multipart form with a single `file` field. Any byte stream is
/// accepted; content type and size are not validated. The response
/// `filename` is the server-side stored path.
async fn upload_report(state: web::Data<AppState>, mut payload: Multipart) -> impl Responder {
    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(e) => {
                tracing::info!("Malformed multipart payload: {}", e);
                return HttpResponse::UnprocessableEntity().json(ErrorResponse {
                    error: "Invalid multipart payload".to_string(),
                    message: e.to_string(),
                    status_code: 422,
                });
            }
        };

        if field.name() != "file" {
            continue;
        }

        let filename = field
            .content_disposition()
            .get_filename()
            .unwrap_or("unnamed")
            .to_string();

        let mut data = web::BytesMut::new();
        while let Some(chunk) = field.next().await {
            match chunk {
                Ok(bytes) => data.extend_from_slice(&bytes),
                Err(e) => {
                    tracing::error!("Failed to read upload stream: {}", e);
                    return HttpResponse::InternalServerError().json(ErrorResponse {
                        error: "Upload failed".to_string(),
                        message: e.to_string(),
                        status_code: 500,
                    });
                }
            }
        }

        return match state.uploads.store(&data, &filename) {
            Ok(stored) => HttpResponse::Ok().json(UploadResponse {
                status: "success".to_string(),
                filename: stored.stored_path,
            }),
            Err(e) => {
                tracing::error!("Failed to persist upload: {}", e);
                HttpResponse::InternalServerError().json(ErrorResponse {
                    error: "Upload failed".to_string(),
                    message: e.to_string(),
                    status_code: 500,
                })
            }
        };
    }

    HttpResponse::UnprocessableEntity().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: "multipart field 'file' is required".to_string(),
        status_code: 422,
    })
}
