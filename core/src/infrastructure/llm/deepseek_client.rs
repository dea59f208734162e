use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    review::ports::LLMClient,
};

/// Chat-completion client for the DeepSeek (OpenAI-compatible) API.
#[derive(Debug, Clone)]
pub struct DeepSeekLLMClient {
    config: LLMConfig,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl DeepSeekLLMClient {
    pub fn new(config: LLMConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    async fn call_chat_api(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest<'_>,
    ) -> Result<String, CoreError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("DeepSeek API request failed: {}", e);
                CoreError::UpstreamFailure {
                    status: None,
                    message: format!("LLM API request failed: {}", e),
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("DeepSeek API error: {} - {}", status, error_text);
            return Err(CoreError::UpstreamFailure {
                status: Some(status.as_u16()),
                message: format!("LLM API returned error: {}", status),
            });
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse DeepSeek response: {}", e);
            CoreError::UpstreamFailure {
                status: None,
                message: format!("Failed to parse LLM response: {}", e),
            }
        })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default();

        if content.is_empty() {
            tracing::warn!("DeepSeek returned an empty completion");
        }

        Ok(content)
    }
}

impl LLMClient for DeepSeekLLMClient {
    async fn generate(
        &self,
        system_instruction: String,
        user_instruction: String,
    ) -> Result<String, CoreError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| CoreError::ConfigurationError("API key not configured".to_string()))?;

        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &system_instruction,
                },
                ChatMessage {
                    role: "user",
                    content: &user_instruction,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        self.call_chat_api(api_key, &request).await
    }
}
