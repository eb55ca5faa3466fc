use serde::{Deserialize, Serialize};

/// Login outcome. Serialized untagged so the wire shape is either
/// `{token, role}` or `{error}`, never both.
///
/// A credential mismatch is returned with HTTP 200 and the error body;
/// this mirrors the contract the frontend was built against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthResponse {
    Granted { token: String, role: String },
    Denied { error: String },
}

/// Signup acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub message: String,
}

/// Q&A bot answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub answer: String,
}

/// Symptom classifier verdict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomResponse {
    pub possible_condition: String,
}

/// Upload outcome; `filename` is the stored path on the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub status: String,
    pub filename: String,
}

/// Liveness payload for GET /
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
