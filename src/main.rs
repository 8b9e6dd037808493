mod app;
mod cli;
mod config;
mod provider;
mod transport;

#[cfg(test)]
mod test_support;

use anyhow::Context;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = cli::Args::parse();

    let secrets = config::Secrets::load_optional(&args.secrets)?;
    tracing::debug!(path = %args.secrets.display(), ?secrets, "resolved secrets");

    let http = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to build HTTP client")?;

    let model = app::build_model(
        &http,
        secrets.as_ref(),
        &args.provider,
        vec![app::DEMO_SYSTEM_PROMPT.to_string()],
    )?;

    let question = args.question().unwrap_or_else(|| app::DEMO_QUESTION.to_string());
    let mut out = std::io::stdout();
    app::run_demo(model.as_ref(), &question, &mut out).await
}
