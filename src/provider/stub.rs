use super::{ChatModel, GenerateFuture};

/// Offline model that echoes the prompt. Handy for trying the CLI without a key.
#[derive(Debug, Default, Clone)]
pub struct StubChatModel {
    system_messages: Vec<String>,
}

impl StubChatModel {
    pub fn new(system_messages: Vec<String>) -> Self {
        Self { system_messages }
    }
}

impl ChatModel for StubChatModel {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn generate<'a>(&'a self, prompt: &'a str) -> GenerateFuture<'a> {
        Box::pin(async move {
            Ok(format!(
                "[stub provider]\nsystem messages: {}\n\nYou said: {prompt}",
                self.system_messages.len()
            ))
        })
    }
}
