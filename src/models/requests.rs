use serde::{Deserialize, Serialize};
use validator::Validate;

/// Credentials for login and signup
///
/// The email is deliberately a plain string: the login stub accepts any
/// shape and compares against the configured demo pair.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AuthRequest {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Question for the health Q&A bot
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuestionRequest {
    #[validate(length(min = 1))]
    pub question: String,
}

/// Free-text symptom description for the symptom classifier
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SymptomRequest {
    #[validate(length(min = 1))]
    pub symptoms: String,
}
