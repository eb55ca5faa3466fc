//! AI-powered health backend
//!
//! Exposes a health Q&A bot, a symptom classifier and report uploads
//! behind a small HTTP API with a demo-only login stub. Model artifacts
//! are loaded once at startup and injected into the route handlers.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{clean_text, extract_keywords, image_to_tensor, preprocess_image};
pub use self::models::{
    AuthRequest, AuthResponse, QuestionRequest, QuestionResponse, SymptomRequest, SymptomResponse,
    UploadedFile,
};
pub use self::services::{
    AuthService, HealthQaBot, InferenceError, QaModel, SymptomClassifier, SymptomModel,
    UploadStore,
};
