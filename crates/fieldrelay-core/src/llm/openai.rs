use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};

use super::CompletionClient;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const COMPLETION_MODEL: &str = "gpt-3.5-turbo-0125";
const MAX_REPLY_TOKENS: u32 = 200;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: String,
}

impl ChatCompletion {
    fn into_first_reply(self) -> Result<String> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::RemoteService("reply contained no choices".to_string()))
    }
}

/// Chat-completion client for the OpenAI API. One blocking call per
/// request, bearer-token auth, fixed model and reply-length cap, a single
/// 30-second timeout and no retry.
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl OpenAiClient {
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            endpoint: CHAT_COMPLETIONS_URL.to_string(),
        }
    }

    /// Point the client at a different completion endpoint (tests, proxies).
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait::async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let body = ChatRequest {
            model: COMPLETION_MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: MAX_REPLY_TOKENS,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .timeout(REQUEST_TIMEOUT)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::RemoteService(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(%status, "completion endpoint returned an error");
            return Err(Error::RemoteService(format!("{status}: {detail}")));
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| Error::RemoteService(format!("malformed reply envelope: {e}")))?;

        info!("received completion reply");
        completion.into_first_reply()
    }
}
