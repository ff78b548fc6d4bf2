use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ProviderClient, ProviderError, ProviderErrorKind};
use crate::domain::AiProvider;

pub const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "openai/o3";
pub const DEFAULT_DEEPSEEK_MODEL: &str = "deepseek/deepseek-chat-v3.1:free";

/// Adapter for OpenAI-compatible chat-completion endpoints.
///
/// Both the OpenAI and DeepSeek provider slots are served through
/// openrouter.ai, so one adapter covers both; the `provider` field decides
/// which slot this instance answers for.
pub struct OpenRouterClient {
    client: Client,
    provider: AiProvider,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: usize,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Option<Vec<Choice>>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenRouterClient {
    pub fn new(
        client: Client,
        provider: AiProvider,
        api_key: String,
        base_url: String,
        model: String,
    ) -> Self {
        Self {
            client,
            provider,
            api_key,
            base_url,
            model,
        }
    }

    fn extract_answer(response: ChatCompletionResponse) -> Option<String> {
        response.choices?.into_iter().next()?.message?.content
    }
}

#[async_trait]
impl ProviderClient for OpenRouterClient {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::not_configured(self.provider));
        }

        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature: 0.7,
            max_tokens: 1000,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                ProviderError::new(self.provider, ProviderErrorKind::Network, e.to_string())
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
                self.provider,
                kind,
                format!("HTTP {}: {}", status, body),
            ));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
            ProviderError::new(
                self.provider,
                ProviderErrorKind::MalformedResponse,
                e.to_string(),
            )
        })?;

        Self::extract_answer(parsed).ok_or_else(|| {
            ProviderError::new(
                self.provider,
                ProviderErrorKind::MalformedResponse,
                "missing choices[0].message.content in response",
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> ChatCompletionResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn given_empty_body_when_extracting_answer_then_returns_none() {
        assert!(OpenRouterClient::extract_answer(parse("{}")).is_none());
    }

    #[test]
    fn given_empty_choices_when_extracting_answer_then_returns_none() {
        assert!(OpenRouterClient::extract_answer(parse(r#"{"choices":[]}"#)).is_none());
    }

    #[test]
    fn given_message_without_content_when_extracting_answer_then_returns_none() {
        let body = r#"{"choices":[{"message":{}}]}"#;
        assert!(OpenRouterClient::extract_answer(parse(body)).is_none());

        let body = r#"{"choices":[{}]}"#;
        assert!(OpenRouterClient::extract_answer(parse(body)).is_none());
    }

    #[test]
    fn given_well_formed_body_when_extracting_answer_then_returns_content() {
        let body = r#"{"choices":[{"message":{"content":"plain answer"}}]}"#;
        assert_eq!(
            OpenRouterClient::extract_answer(parse(body)).as_deref(),
            Some("plain answer")
        );
    }
}
