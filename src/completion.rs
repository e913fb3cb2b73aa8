//! Chat-completion client for the text-generation provider.
//!
//! The wire types stay compatible with the OpenAI REST shape, which is what
//! the Zhipu endpoint speaks. Failures come back as a real error enum; the
//! handler decides whether to embed them in the document or re-render the
//! form.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const MODEL: &str = "glm-4-flash";
pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 4096;
/// Deadline for one provider round trip. A hung call must not hold the
/// admission gate forever.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// A single message in the conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Request body for `POST {base}chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("AI_API_KEY 未配置")]
    MissingApiKey,
    #[error("请求超时（{0:?}）")]
    Timeout(Duration),
    #[error("请求失败：{0}")]
    Transport(reqwest::Error),
    #[error("服务端返回 {status}：{body}")]
    Api { status: u16, body: String },
    #[error("服务端未返回任何内容")]
    EmptyResponse,
}

impl CompletionError {
    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CompletionError::Timeout(REQUEST_TIMEOUT)
        } else {
            CompletionError::Transport(err)
        }
    }
}

/// Seam for the outbound provider call; tests swap in a mock.
#[async_trait]
pub trait CompletionBackend {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

pub struct ZhipuClient {
    http: reqwest::Client,
    api_key: Option<String>,
    api_base: String,
}

impl ZhipuClient {
    pub fn new(http: reqwest::Client, api_key: Option<String>, api_base: String) -> Self {
        Self {
            http,
            api_key,
            api_base,
        }
    }

    /// The shared outbound client the server hands to `ZhipuClient`.
    pub fn build_http_client() -> reqwest::Client {
        reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(Duration::from_secs(10))
            .user_agent("textbook-background-server/0.3")
            .build()
            .expect("Failed to create reqwest client")
    }

    fn endpoint(&self) -> String {
        format!("{}chat/completions", self.api_base)
    }
}

#[async_trait]
impl CompletionBackend for ZhipuClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let api_key = self.api_key.as_deref().ok_or(CompletionError::MissingApiKey)?;

        let request = ChatCompletionRequest {
            model: MODEL.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            stream: false,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(api_key)
            .header("lora_id", "0")
            .json(&request)
            .send()
            .await
            .map_err(CompletionError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(CompletionError::from_reqwest)?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(CompletionError::EmptyResponse)
    }
}
