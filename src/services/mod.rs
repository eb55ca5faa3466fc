// Service exports
pub mod auth;
pub mod classifier;
pub mod qa;
pub mod upload;

pub use auth::AuthService;
pub use classifier::{ClassifierArtifact, SymptomClassifier};
pub use qa::HealthQaBot;
pub use upload::{UploadError, UploadStore};

use thiserror::Error;

/// Errors surfaced by the model adapters
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Model artifact load failed: {0}")]
    ArtifactLoad(String),

    #[error("Tokenization failed: {0}")]
    Tokenize(String),

    #[error("Inference failed: {0}")]
    Inference(String),
}

/// Generative question answering over one pre-trained artifact
///
/// Implementations own their artifact for the process lifetime; loading
/// happens once at startup and the adapter is shared read-only between
/// in-flight requests.
pub trait QaModel: Send + Sync {
    fn answer(&self, question: &str) -> Result<String, InferenceError>;
}

/// Single-label text classification over one pre-trained artifact
pub trait SymptomModel: Send + Sync {
    fn predict(&self, symptoms: &str) -> Result<String, InferenceError>;
}
