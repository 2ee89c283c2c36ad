/// BlogMentor error types
#[derive(Debug, thiserror::Error)]
pub enum BlogMentorError {
    /// Configuration error (missing credential, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generation/LLM related error
    #[error("Generation error: {0}")]
    Generation(String),

    /// Network/HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BlogMentorError {
    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create generation error
    pub fn generation<S: Into<String>>(msg: S) -> Self {
        Self::Generation(msg.into())
    }

    /// Create network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Self::Network(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }

    /// True when the error is a missing/invalid configuration precondition,
    /// detected before any network attempt
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// HTTP response conversion (for actix-web)
impl BlogMentorError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::Json(_) => 400,
            Self::Network(_) => 503,
            Self::Config(_) => 500,
            Self::Generation(_) => 500,
            Self::Internal(_) => 500,
            Self::Io(_) => 500,
            Self::Other(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(BlogMentorError::invalid_input("empty topic").status_code(), 400);
        assert_eq!(BlogMentorError::network("connection refused").status_code(), 503);
        assert_eq!(BlogMentorError::config("no API key").status_code(), 500);
        assert_eq!(BlogMentorError::generation("empty candidates").status_code(), 500);
    }

    #[test]
    fn test_is_config() {
        assert!(BlogMentorError::config("no API key").is_config());
        assert!(!BlogMentorError::generation("boom").is_config());
    }
}
