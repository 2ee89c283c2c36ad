use crate::error::BlogMentorError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default Gemini API endpoint
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// BlogMentor application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Gemini API key. Absence is a precondition failure at submission
    /// time, not a startup error.
    pub gemini_api_key: Option<String>,

    /// Gemini API base URL
    pub gemini_base_url: String,

    /// Generation model name
    pub gemini_model: String,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Directory served as the web root (single page + assets)
    pub static_dir: PathBuf,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            gemini_model: "gemini-2.5-pro".to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 8000,
            static_dir: PathBuf::from("./static"),
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, BlogMentorError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-pro".to_string()),
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8000),
            static_dir: Self::get_env_path("STATIC_DIR")
                .unwrap_or_else(|| PathBuf::from("./static")),
            log_dir: Self::get_env_path("LOG_DIR")
                .unwrap_or_else(|| PathBuf::from("./log")),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
        };

        // Ensure required directories exist
        config.ensure_directories()?;

        Ok(config)
    }

    /// Get PathBuf from environment variable
    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key).ok().map(PathBuf::from)
    }

    /// Ensure required directories exist, create if not
    pub fn ensure_directories(&self) -> Result<(), BlogMentorError> {
        if !self.log_dir.exists() {
            std::fs::create_dir_all(&self.log_dir).map_err(|e| {
                BlogMentorError::config(format!(
                    "Failed to create log directory {}: {}",
                    self.log_dir.display(),
                    e
                ))
            })?;
        }

        Ok(())
    }

    /// True when a Gemini credential is configured
    pub fn has_credential(&self) -> bool {
        self.gemini_api_key.is_some()
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), BlogMentorError> {
        // Validate Gemini URL
        if !self.gemini_base_url.starts_with("http://")
            && !self.gemini_base_url.starts_with("https://") {
            return Err(BlogMentorError::config(
                "Gemini base URL must start with http:// or https://"
            ));
        }

        // Validate model name
        if self.gemini_model.is_empty() {
            return Err(BlogMentorError::config("Gemini model name cannot be empty"));
        }

        // Validate port range
        if self.server_port == 0 {
            return Err(BlogMentorError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.gemini_model, "gemini-2.5-pro");
        assert!(!config.has_credential());
    }

    #[test]
    fn test_server_bind_address() {
        let config = AppConfig::default();
        assert_eq!(config.server_bind_address(), "127.0.0.1:8000");
    }

    #[test]
    fn test_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());

        let mut invalid_config = AppConfig::default();
        invalid_config.gemini_base_url = "localhost:11434".to_string();
        assert!(invalid_config.validate().is_err());

        let mut invalid_config = AppConfig::default();
        invalid_config.gemini_model = String::new();
        assert!(invalid_config.validate().is_err());
    }

    #[test]
    fn test_has_credential() {
        let mut config = AppConfig::default();
        assert!(!config.has_credential());
        config.gemini_api_key = Some("test-key".to_string());
        assert!(config.has_credential());
    }
}
