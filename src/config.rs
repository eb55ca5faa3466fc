use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub models: ModelSettings,
    #[serde(default)]
    pub upload: UploadSettings,
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

/// Locations of the pre-trained model artifacts loaded at startup
#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    #[serde(default = "default_qa_model_dir")]
    pub qa_model_dir: String,
    #[serde(default = "default_classifier_path")]
    pub classifier_path: String,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            qa_model_dir: default_qa_model_dir(),
            classifier_path: default_classifier_path(),
        }
    }
}

fn default_qa_model_dir() -> String { "health_qa_bot_model".to_string() }
fn default_classifier_path() -> String { "symptom_checker_model.json".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    #[serde(default = "default_upload_dir")]
    pub dir: String,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self { dir: default_upload_dir() }
    }
}

fn default_upload_dir() -> String { "uploaded_files".to_string() }

/// Demo-only credential pair and the fixed token/role returned on a match.
/// This is a login stub for frontend integration, not an auth system.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    #[serde(default = "default_demo_email")]
    pub demo_email: String,
    #[serde(default = "default_demo_password")]
    pub demo_password: String,
    #[serde(default = "default_demo_token")]
    pub demo_token: String,
    #[serde(default = "default_demo_role")]
    pub demo_role: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            demo_email: default_demo_email(),
            demo_password: default_demo_password(),
            demo_token: default_demo_token(),
            demo_role: default_demo_role(),
        }
    }
}

fn default_demo_email() -> String { "patient@demo.com".to_string() }
fn default_demo_password() -> String { "123456".to_string() }
fn default_demo_token() -> String { "dummy_token".to_string() }
fn default_demo_role() -> String { "patient".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with HEALTH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with HEALTH_)
            // e.g., HEALTH__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("HEALTH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("HEALTH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_paths() {
        let models = ModelSettings::default();
        assert_eq!(models.qa_model_dir, "health_qa_bot_model");
        assert_eq!(models.classifier_path, "symptom_checker_model.json");
    }

    #[test]
    fn test_default_upload_dir() {
        assert_eq!(UploadSettings::default().dir, "uploaded_files");
    }

    #[test]
    fn test_default_demo_credentials() {
        let auth = AuthSettings::default();
        assert_eq!(auth.demo_email, "patient@demo.com");
        assert_eq!(auth.demo_token, "dummy_token");
        assert_eq!(auth.demo_role, "patient");
    }
}
