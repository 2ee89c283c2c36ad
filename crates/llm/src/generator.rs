use async_trait::async_trait;
use blogmentor_common::Result;

/// Common trait for text generation backends
///
/// The server holds the backend behind this trait so the submission flow
/// can be exercised against a stub in tests.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate the full (non-streamed) response text for a prompt
    async fn generate_text(&self, prompt: &str) -> Result<String>;
}
