use serde::{Deserialize, Serialize};

/// Gemini generateContent request
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    /// Conversation turns (single turn for blog generation)
    pub contents: Vec<Content>,

    /// Generation options
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Single-turn request from one opaque prompt string
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
            generation_config: None,
        }
    }

    /// Total prompt length in bytes across all parts
    pub fn prompt_len(&self) -> usize {
        self.contents
            .iter()
            .flat_map(|c| c.parts.iter())
            .map(|p| p.text.len())
            .sum()
    }
}

/// One conversation turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Text fragments of the turn
    pub parts: Vec<Part>,
}

/// Text fragment within a turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Fragment text (absent for non-text parts in responses)
    #[serde(default)]
    pub text: String,
}

/// Generation options
#[derive(Debug, Clone, Serialize, Default)]
pub struct GenerationConfig {
    /// Temperature (0.0 - 2.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Top-p sampling
    #[serde(rename = "topP", skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    /// Maximum tokens to generate
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<i32>,
}

/// Gemini generateContent response
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    /// Generated candidates (first one carries the post)
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One generated candidate
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// Candidate content (absent when generation was blocked)
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, None when the response
    /// carries no usable text
    pub fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content.parts.iter().map(|p| p.text.as_str()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = GenerateContentRequest::from_prompt("주제에 대해 써줘");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "주제에 대해 써줘");
        // No generationConfig key unless set
        assert!(json.get("generationConfig").is_none());
    }

    #[test]
    fn test_generation_config_renames() {
        let request = GenerateContentRequest {
            generation_config: Some(GenerationConfig {
                temperature: Some(0.7),
                top_p: Some(0.9),
                max_output_tokens: None,
            }),
            ..GenerateContentRequest::from_prompt("p")
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json["generationConfig"]["topP"].is_number());
        assert!(json["generationConfig"].get("maxOutputTokens").is_none());
    }

    #[test]
    fn test_first_text_extraction() {
        let raw = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "제목\n"}, {"text": "본문"}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.first_text().unwrap(), "제목\n본문");
    }

    #[test]
    fn test_first_text_empty_cases() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.first_text().is_none());

        let blocked = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(blocked).unwrap();
        assert!(response.first_text().is_none());
    }

    #[test]
    fn test_prompt_len() {
        let request = GenerateContentRequest::from_prompt("abcd");
        assert_eq!(request.prompt_len(), 4);
    }
}
