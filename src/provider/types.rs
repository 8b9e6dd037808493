use crate::transport::TransportError;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Future returned by [`ChatModel::generate`].
pub type GenerateFuture<'a> = Pin<Box<dyn Future<Output = Result<String, ChatError>> + Send + 'a>>;

#[derive(Debug, Error)]
pub enum ChatError {
    /// Transport failures pass through untouched.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The provider answered successfully but with no choices.
    #[error("empty response: provider returned no choices")]
    EmptyResponse,
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Chat model interface.
///
/// A single-shot completion: each call sees only the configured system
/// messages plus the given prompt, never earlier turns.
pub trait ChatModel {
    fn name(&self) -> &'static str;

    /// Generate one reply for `prompt`.
    fn generate<'a>(&'a self, prompt: &'a str) -> GenerateFuture<'a>;
}
