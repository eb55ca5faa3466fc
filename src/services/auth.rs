use crate::config::AuthSettings;
use crate::models::{AuthResponse, SignupResponse};

/// Demo-only credential check
///
/// One configured credential pair and a fixed token/role on a match.
/// A mismatch is reported in the response body, not as an HTTP error.
/// Signup acknowledges without persisting anything: no uniqueness check,
/// no password storage.
#[derive(Debug, Clone)]
pub struct AuthService {
    settings: AuthSettings,
}

impl AuthService {
    pub fn new(settings: AuthSettings) -> Self {
        Self { settings }
    }

    pub fn login(&self, email: &str, password: &str) -> AuthResponse {
        if email == self.settings.demo_email && password == self.settings.demo_password {
            AuthResponse::Granted {
                token: self.settings.demo_token.clone(),
                role: self.settings.demo_role.clone(),
            }
        } else {
            tracing::info!(email = %email, "Rejected login attempt");
            AuthResponse::Denied {
                error: "Invalid credentials".to_string(),
            }
        }
    }

    pub fn signup(&self, email: &str) -> SignupResponse {
        SignupResponse {
            message: format!("Signed up {}", email),
        }
    }
}
