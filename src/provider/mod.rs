#[cfg(feature = "openai")]
pub mod openai;
pub mod stub;
mod types;

pub use types::{ChatError, ChatModel, GenerateFuture, Message, Role};
