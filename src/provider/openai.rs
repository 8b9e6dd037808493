use super::{ChatError, ChatModel, GenerateFuture, Message};
use crate::transport::bearer_json_request;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const GPT_4O: &str = "gpt-4o";

/// OpenAI chat-completions client with a fixed model and system prompt.
#[derive(Clone)]
pub struct OpenAiChatModel {
    http: reqwest::Client,
    model: String,
    api_key: String,
    system_messages: Vec<String>,
    endpoint: String,
}

impl fmt::Debug for OpenAiChatModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiChatModel")
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("system_messages", &self.system_messages)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl OpenAiChatModel {
    /// `gpt-4o` client. System messages are sent in order before every prompt.
    pub fn new(http: reqwest::Client, api_key: impl Into<String>, system_messages: Vec<String>) -> Self {
        Self {
            http,
            model: GPT_4O.to_string(),
            api_key: api_key.into(),
            system_messages,
            endpoint: CHAT_COMPLETIONS_URL.to_string(),
        }
    }

    /// Point the client at a different chat-completions URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Fresh request for `prompt`; nothing carries over between calls.
    fn build_request(&self, prompt: &str) -> ChatCompletionRequest {
        let mut messages: Vec<Message> = self
            .system_messages
            .iter()
            .map(|m| Message::system(m.as_str()))
            .collect();
        messages.push(Message::user(prompt));

        ChatCompletionRequest {
            model: self.model.clone(),
            messages,
        }
    }
}

impl ChatModel for OpenAiChatModel {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn generate<'a>(&'a self, prompt: &'a str) -> GenerateFuture<'a> {
        Box::pin(async move {
            let req = self.build_request(prompt);
            tracing::debug!(model = %req.model, messages = req.messages.len(), "sending chat completion");

            let resp: ChatCompletionResponse =
                bearer_json_request(&self.http, &self.api_key, &self.endpoint, Method::POST, &req).await?;

            first_choice_text(resp)
        })
    }
}

fn first_choice_text(resp: ChatCompletionResponse) -> Result<String, ChatError> {
    let Some(choice) = resp.choices.unwrap_or_default().into_iter().next() else {
        tracing::error!("chat completion returned no choices");
        return Err(ChatError::EmptyResponse);
    };
    Ok(choice
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
}

// Only `choices[0].message.content` is read. Other fields are left to serde's
// unknown-key handling, and every level accepts `null`.
#[derive(Debug, Clone, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Option<Vec<Option<Choice>>>,
}

#[derive(Debug, Clone, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ReplyMessage>,
}

#[derive(Debug, Clone, Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}
