//! BlogMentor LLM Integration
//!
//! Gemini API client and the Mentor TK blog post prompt

mod client;
mod generator;
mod prompts;
mod types;

pub use client::GeminiClient;
pub use generator::TextGenerator;
pub use prompts::{blog_post_prompt, BLOG_PROMPT};
pub use types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
