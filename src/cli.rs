use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_SECRETS_PATH;

/// Ask a chat model one scripted question and print the answer.
#[derive(Debug, Parser)]
#[command(name = "convogen")]
#[command(version)]
#[command(about = "Chat completion demo", long_about = None)]
pub struct Args {
    /// YAML file holding `openai.apiKey`
    #[arg(long = "secrets", value_name = "PATH", default_value = DEFAULT_SECRETS_PATH)]
    pub secrets: PathBuf,

    /// Provider ("openai" or "stub")
    #[arg(long = "provider", default_value = "openai")]
    pub provider: String,

    /// Question to ask instead of the scripted one
    #[arg(value_name = "QUESTION")]
    pub question: Vec<String>,
}

impl Args {
    /// The custom question, if one was given.
    pub fn question(&self) -> Option<String> {
        let q = self.question.join(" ");
        if q.trim().is_empty() { None } else { Some(q) }
    }
}
