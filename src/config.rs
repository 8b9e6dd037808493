use anyhow::Context;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

pub const DEFAULT_SECRETS_PATH: &str = "secrets.yaml";
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Credentials file:
///
/// ```yaml
/// openai:
///   apiKey: sk-...
/// ```
#[derive(Clone, Deserialize, Default)]
pub struct Secrets {
    #[serde(default)]
    pub openai: OpenAiSecrets,
}

#[derive(Clone, Deserialize, Default)]
pub struct OpenAiSecrets {
    #[serde(rename = "apiKey")]
    pub api_key: Option<String>,
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets").field("openai", &self.openai).finish()
    }
}

impl fmt::Debug for OpenAiSecrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.api_key.as_ref().map(|_| "<redacted>");
        f.debug_struct("OpenAiSecrets").field("api_key", &key).finish()
    }
}

impl Secrets {
    /// Load secrets if the file exists, otherwise return Ok(None).
    pub fn load_optional(path: impl AsRef<Path>) -> anyhow::Result<Option<Self>> {
        let path = path.as_ref();
        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "could not read secrets");
                return Err(anyhow::Error::new(e))
                    .with_context(|| format!("failed to read secrets: {}", path.display()));
            }
        };

        let s = String::from_utf8(bytes).context("secrets file is not valid UTF-8")?;
        let secrets: Secrets = match serde_saphyr::from_str(&s) {
            Ok(secrets) => secrets,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "could not unmarshal secrets");
                anyhow::bail!("failed to parse YAML: {}: {e}", path.display());
            }
        };
        Ok(Some(secrets))
    }
}

/// Pick the OpenAI key: environment first, then the secrets file.
pub fn resolve_openai_key(env_key: Option<String>, secrets: Option<&Secrets>) -> anyhow::Result<String> {
    let key = env_key
        .filter(|k| !k.trim().is_empty())
        .or_else(|| secrets.and_then(|s| s.openai.api_key.clone()))
        .filter(|k| !k.trim().is_empty());

    if key.is_none() {
        tracing::error!(env = OPENAI_API_KEY_ENV, "missing OpenAI API key");
    }
    key.with_context(|| {
        format!("missing OpenAI API key (set {OPENAI_API_KEY_ENV} or {DEFAULT_SECRETS_PATH} openai.apiKey)")
    })
}
