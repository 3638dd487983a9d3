use super::error::{GatewayError, GatewayResult};
use crate::config::{ApiKey, AssistantConfig};
use crate::types::{ChatMessage, Role};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

// ============================================
// Request Types (generateContent wire shape)
// ============================================

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateRequest {
    /// Single user turn with no system instruction.
    pub fn prompt(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::turn(Role::User, text)],
            system_instruction: None,
            generation_config: None,
        }
    }

    pub fn with_system_instruction(mut self, text: impl Into<String>) -> Self {
        self.system_instruction = Some(Content {
            role: None,
            parts: vec![Part { text: text.into() }],
        });
        self
    }

    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn turn(role: Role, text: impl Into<String>) -> Self {
        let role = match role {
            Role::User => "user",
            Role::Model => "model",
        };
        Self {
            role: Some(role.to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }

    /// Concatenated text of every part.
    pub fn text(&self) -> String {
        self.parts.iter().map(|part| part.text.as_str()).collect()
    }
}

impl From<&ChatMessage> for Content {
    fn from(message: &ChatMessage) -> Self {
        Content::turn(message.role, message.text.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
}

// ============================================
// Response Types
// ============================================

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Pulls the text payload out of a generateContent response body.
pub fn extract_text(body: &str) -> GatewayResult<String> {
    let parsed: GenerateResponse = serde_json::from_str(body)?;
    let text: String = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(GatewayError::MalformedResponse(
            "response contained no text".to_string(),
        ));
    }
    Ok(text)
}

// ============================================
// Backend Trait + Gemini Implementation
// ============================================

/// Transport to a hosted text-generation service.
///
/// Futures are not `Send`: every call runs on the UI thread.
#[async_trait(?Send)]
pub trait TextBackend {
    async fn generate(&self, key: &ApiKey, request: &GenerateRequest) -> GatewayResult<String>;
}

pub struct GeminiClient {
    client: Client,
    endpoint: String,
    model: String,
}

impl GeminiClient {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }

    pub fn from_config(config: &AssistantConfig) -> Self {
        Self::new(config.endpoint.clone(), config.model.clone())
    }

    pub fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

#[async_trait(?Send)]
impl TextBackend for GeminiClient {
    async fn generate(&self, key: &ApiKey, request: &GenerateRequest) -> GatewayResult<String> {
        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", key.expose())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        extract_text(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_text_joins_parts() {
        let body = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hello"},{"text":" world"}]}}]}"#;
        assert_eq!(extract_text(body).unwrap(), "Hello world");
    }

    #[test]
    fn test_extract_text_rejects_empty_and_invalid() {
        assert!(matches!(
            extract_text(r#"{"candidates":[]}"#),
            Err(GatewayError::MalformedResponse(_))
        ));
        assert!(matches!(
            extract_text(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#),
            Err(GatewayError::MalformedResponse(_))
        ));
        assert!(matches!(
            extract_text("<html>bad gateway</html>"),
            Err(GatewayError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_request_serializes_to_wire_shape() {
        let request = GenerateRequest::prompt("hi")
            .with_system_instruction("be nice")
            .with_generation_config(GenerationConfig {
                temperature: Some(0.7),
                top_p: Some(0.95),
                ..GenerationConfig::default()
            });

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [{"role": "user", "parts": [{"text": "hi"}]}],
                "systemInstruction": {"parts": [{"text": "be nice"}]},
                "generationConfig": {"temperature": 0.7, "topP": 0.95}
            })
        );
    }

    #[test]
    fn test_url_includes_model() {
        let client = GeminiClient::new("https://example.test/v1beta", "gemini-x");
        assert_eq!(
            client.url(),
            "https://example.test/v1beta/models/gemini-x:generateContent"
        );
    }
}
