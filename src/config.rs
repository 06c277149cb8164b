//! Runtime configuration, read from the environment the workflow provides.

use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};

use crate::content::JsonObject;
use crate::error::ConfigError;

/// Env var holding `${{ toJSON(github) }}`.
pub const GITHUB_CONTEXT_ENV_KEY: &str = "GITHUB_CONTEXT";
/// Env var holding `${{ toJSON(job) }}`.
pub const JOB_CONTEXT_ENV_KEY: &str = "JOB_CONTEXT";

/// Parsed inputs for one notification.
#[derive(Debug)]
pub struct NotifierConfig {
    /// Event context.
    pub github: JsonObject,
    /// Job context.
    pub job: JsonObject,
    /// Chat webhook URL. Carries the space key and token, so it is kept secret.
    pub webhook_url: SecretString,
}

impl NotifierConfig {
    /// Build config from process environment variables.
    pub fn from_env(webhook_url: &str) -> Result<Self, ConfigError> {
        Self::from_lookup(webhook_url, |key| std::env::var(key).ok())
    }

    /// Build config using `lookup` to resolve environment variables.
    pub fn from_lookup<F>(webhook_url: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let github = parse_context(GITHUB_CONTEXT_ENV_KEY, lookup(GITHUB_CONTEXT_ENV_KEY))?;
        let job = parse_context(JOB_CONTEXT_ENV_KEY, lookup(JOB_CONTEXT_ENV_KEY))?;
        validate_webhook_url(webhook_url)?;

        Ok(Self {
            github,
            job,
            webhook_url: SecretString::from(webhook_url.to_string()),
        })
    }

    /// Host of the webhook URL, safe to log.
    pub fn webhook_host(&self) -> String {
        Url::parse(self.webhook_url.expose_secret())
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_default()
    }
}

fn validate_webhook_url(raw: &str) -> Result<(), ConfigError> {
    if raw.is_empty() {
        return Err(ConfigError::InvalidValue {
            key: "webhook-url".into(),
            message: "must not be empty".into(),
        });
    }
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
        key: "webhook-url".into(),
        message: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidValue {
            key: "webhook-url".into(),
            message: format!("unsupported scheme {other:?}"),
        }),
    }
}

/// An unset or empty variable is missing; anything else must be a JSON object.
fn parse_context(key: &str, raw: Option<String>) -> Result<JsonObject, ConfigError> {
    let raw = raw
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::InvalidJson {
        key: key.to_string(),
        source,
    })
}
