use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ProviderClient, ProviderError, ProviderErrorKind};
use crate::domain::AiProvider;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Adapter for the Google Gemini `generateContent` endpoint.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiClient {
    pub fn new(client: Client, api_key: String, base_url: String, model: String) -> Self {
        Self {
            client,
            api_key,
            base_url,
            model,
        }
    }

    fn extract_answer(response: GenerateContentResponse) -> Option<String> {
        response
            .candidates?
            .into_iter()
            .next()?
            .content?
            .parts?
            .into_iter()
            .next()?
            .text
    }
}

#[async_trait]
impl ProviderClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::not_configured(AiProvider::Gemini));
        }

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                ProviderError::new(AiProvider::Gemini, ProviderErrorKind::Network, e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let kind = match status.as_u16() {
                401 | 403 => ProviderErrorKind::Auth,
                429 => ProviderErrorKind::RateLimited,
                _ => ProviderErrorKind::Unknown,
            };
            return Err(ProviderError::new(
                AiProvider::Gemini,
                kind,
                format!("HTTP {}: {}", status, body),
            ));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            ProviderError::new(
                AiProvider::Gemini,
                ProviderErrorKind::MalformedResponse,
                e.to_string(),
            )
        })?;

        Self::extract_answer(parsed).ok_or_else(|| {
            ProviderError::new(
                AiProvider::Gemini,
                ProviderErrorKind::MalformedResponse,
                "missing candidates[0].content.parts[0].text in response",
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> GenerateContentResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn given_empty_body_when_extracting_answer_then_returns_none() {
        assert!(GeminiClient::extract_answer(parse("{}")).is_none());
    }

    #[test]
    fn given_empty_candidates_when_extracting_answer_then_returns_none() {
        assert!(GeminiClient::extract_answer(parse(r#"{"candidates":[]}"#)).is_none());
    }

    #[test]
    fn given_candidate_without_text_when_extracting_answer_then_returns_none() {
        let body = r#"{"candidates":[{"content":{"parts":[{}]}}]}"#;
        assert!(GeminiClient::extract_answer(parse(body)).is_none());

        let body = r#"{"candidates":[{"content":{"parts":[]}}]}"#;
        assert!(GeminiClient::extract_answer(parse(body)).is_none());

        let body = r#"{"candidates":[{}]}"#;
        assert!(GeminiClient::extract_answer(parse(body)).is_none());
    }

    #[test]
    fn given_well_formed_body_when_extracting_answer_then_returns_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"4"}]}}]}"#;
        assert_eq!(GeminiClient::extract_answer(parse(body)).as_deref(), Some("4"));
    }
}
