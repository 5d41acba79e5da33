use pathforge_runtime_config::UpstreamSettings;
use tracing::debug;

use crate::error::{CompletionError, CompletionResult};
use crate::wire::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, UpstreamErrorBody};

/// Longest slice of a non-JSON upstream error body carried into the error.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Chat-completion client bound to one caller's API key.
pub struct CompletionClient {
    client: reqwest::Client,
    settings: UpstreamSettings,
    api_key: String,
}

impl CompletionClient {
    /// Create a client for `api_key`. Fails on an empty key.
    pub fn new(settings: &UpstreamSettings, api_key: &str) -> CompletionResult<Self> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(CompletionError::MissingApiKey);
        }
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            settings: settings.clone(),
            api_key: api_key.to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    fn url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        )
    }

    /// Request body sent for `prompt`.
    pub fn request_for(&self, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![
                ChatMessage::system(&self.settings.system_prompt),
                ChatMessage::user(prompt),
            ],
            temperature: self.settings.temperature,
            top_p: self.settings.top_p,
            presence_penalty: self.settings.presence_penalty,
            frequency_penalty: self.settings.frequency_penalty,
            stop: self.settings.stop.clone(),
        }
    }

    /// Send `prompt` and return the first choice's text.
    pub async fn complete(&self, prompt: &str) -> CompletionResult<String> {
        let body = self.request_for(prompt);
        debug!(model = %body.model, prompt_len = prompt.len(), "sending chat completion");

        let resp = self
            .client
            .post(self.url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let completion: ChatCompletionResponse = parse_response(resp).await?;
        completion
            .first_content()
            .map(str::to_string)
            .ok_or(CompletionError::EmptyCompletion)
    }
}

/// Parse an upstream response: the deserialized body on 2xx, otherwise an
/// API error carrying the status and the upstream's message.
async fn parse_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> CompletionResult<T> {
    let status = resp.status();
    let text = resp.text().await?;
    if !status.is_success() {
        return Err(CompletionError::api(
            status.as_u16(),
            error_message(status, &text),
        ));
    }
    Ok(serde_json::from_str(&text)?)
}

fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<UpstreamErrorBody>(body) {
        return parsed.error.message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status.canonical_reason().unwrap_or("unknown error").to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect()
    }
}
