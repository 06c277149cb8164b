//! Error types for the notifier.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),

    #[error("Interrupted before the notification was delivered")]
    Interrupted,
}

/// Configuration-related errors. All are detected before any content is built.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("environment var {0} not set")]
    MissingEnvVar(String),

    #[error("failed unmarshaling {key}: {source}")]
    InvalidJson {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// The content record could not be encoded as a card payload.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("error marshal card payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Webhook delivery errors.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("sending http request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected HTTP status code {status}\n got body: {body}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Result type alias for the notifier.
pub type Result<T> = std::result::Result<T, Error>;
