//! Waste classifier backed by Gemini's `generateContent`.
//!
//! Sends the photo inline together with the sorting instructions and reads
//! the DECISION / REASON answer back.

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use binfinder::{
    DomainError, ImageInput, ProviderError, WasteClassification, WasteClassifier,
    WASTE_SORTING_PROMPT,
};

use crate::config::GeminiConfig;
use crate::status::{map_http_error, request_failed};

/// Classifier calling the Gemini API.
#[derive(Clone)]
pub struct GeminiClassifier {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClassifier {
    /// Creates a classifier, failing early on a missing key.
    pub fn new(config: GeminiConfig) -> Result<Self, DomainError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DomainError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate(&self, request: &GenerateContentRequest) -> Result<Value, ProviderError> {
        let url = format!(
            "{}/{model}:generateContent",
            self.config.base_url,
            model = self.config.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(request)
            .send()
            .await
            .map_err(request_failed)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        response
            .json()
            .await
            .map_err(|err| ProviderError::ParseError(err.to_string()))
    }
}

#[async_trait]
impl WasteClassifier for GeminiClassifier {
    async fn classify(&self, image: &ImageInput) -> Result<WasteClassification, ProviderError> {
        tracing::debug!(
            "Sending {} byte {} image to {}",
            image.bytes.len(),
            image.mime_type,
            self.config.model
        );

        let payload = self.generate(&build_request(image)).await?;
        let answer = first_candidate_text(&payload).ok_or_else(|| {
            ProviderError::ParseError("Gemini returned no answer".to_string())
        })?;

        WasteClassification::parse(&answer)
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: Blob,
    },
    Text {
        text: String,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Blob {
    mime_type: String,
    data: String,
}

fn build_request(image: &ImageInput) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: "user".to_string(),
            parts: vec![
                Part::InlineData {
                    inline_data: Blob {
                        mime_type: image.mime_type.clone(),
                        data: general_purpose::STANDARD.encode(&image.bytes),
                    },
                },
                Part::Text {
                    text: WASTE_SORTING_PROMPT.to_string(),
                },
            ],
        }],
    }
}

// ============================================
// Helper Functions
// ============================================

/// Text of the first candidate; later candidates are alternatives, not continuations.
fn first_candidate_text(root: &Value) -> Option<String> {
    let parts = root.pointer("/candidates/0/content/parts")?.as_array()?;

    let text = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use binfinder::WasteCategory;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let image = ImageInput::new("image/jpeg", vec![1, 2, 3]).unwrap();
        let request = serde_json::to_value(build_request(&image)).unwrap();

        let parts = &request["contents"][0]["parts"];
        assert_eq!(request["contents"][0]["role"], "user");
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[0]["inlineData"]["data"], "AQID");
        assert_eq!(parts[1]["text"], WASTE_SORTING_PROMPT);
    }

    #[test]
    fn test_first_candidate_parts_are_joined() {
        let payload = json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "DECISION: COMPOST\n" },
                        { "text": "  " },
                        { "text": "REASON: Food scraps." }
                    ]
                }
            }]
        });

        let answer = first_candidate_text(&payload).unwrap();
        assert_eq!(answer, "DECISION: COMPOST\nREASON: Food scraps.");

        let parsed = WasteClassification::parse(&answer).unwrap();
        assert_eq!(parsed.decision, WasteCategory::Compost);
        assert_eq!(parsed.reason, "Food scraps.");
    }

    #[test]
    fn test_later_candidates_are_ignored() {
        let payload = json!({
            "candidates": [
                { "content": { "parts": [{ "text": "DECISION: TRASH" }] } },
                { "content": { "parts": [{ "text": "DECISION: RECYCLE" }] } }
            ]
        });
        assert_eq!(first_candidate_text(&payload).as_deref(), Some("DECISION: TRASH"));
    }

    #[test]
    fn test_no_answer_without_candidates() {
        assert_eq!(first_candidate_text(&json!({ "promptFeedback": {} })), None);
        assert_eq!(first_candidate_text(&json!({ "candidates": [] })), None);
        assert_eq!(
            first_candidate_text(&json!({ "candidates": [{ "finishReason": "SAFETY" }] })),
            None
        );
    }

    #[test]
    fn test_missing_key_fails_at_construction() {
        assert!(GeminiClassifier::new(GeminiConfig::new(" "))
            .err()
            .unwrap()
            .is_configuration());

        let classifier =
            GeminiClassifier::new(GeminiConfig::new("key").with_model("gemini-pro")).unwrap();
        assert_eq!(classifier.model(), "gemini-pro");
    }
}
