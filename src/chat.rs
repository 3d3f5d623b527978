//! Chat completion boundary
//!
//! Every judgement and hint is a single user message sent to an
//! OpenAI-compatible `chat/completions` endpoint, OpenRouter by default.

use log::*;
use serde_derive::*;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "openai/gpt-oss-20b:free";

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Service answered with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Reply contained no choices")]
    NoChoices,
    #[error("Reply contained no text")]
    NoContent,
}

/// Sends one prompt and returns the model's text reply
#[cfg_attr(test, mockall::automock)]
pub trait ChatClient: Send + Sync {
    fn complete(&self, prompt: &str) -> Result<String, ChatError>;
}

#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<RequestMessage<'a>>,
}

#[derive(Serialize, Debug)]
struct RequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize, Debug)]
struct ResponseMessage {
    content: Option<String>,
}

/// Blocking client for OpenRouter or any other OpenAI-compatible service
pub struct OpenRouterClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenRouterClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        OpenRouterClient {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl ChatClient for OpenRouterClient {
    fn complete(&self, prompt: &str) -> Result<String, ChatError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![RequestMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!("Sending prompt to {}: {}", self.model, prompt);

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ChatError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response: ChatResponse = response.json()?;
        reply_text(response)
    }
}

fn reply_text(response: ChatResponse) -> Result<String, ChatError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(ChatError::NoChoices)?;

    let content = choice.message.content.ok_or(ChatError::NoContent)?;
    debug!("Model replied: {}", content);

    Ok(content)
}
