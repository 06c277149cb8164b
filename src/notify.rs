//! End-to-end notification: classify, render, deliver.

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::cards;
use crate::config::NotifierConfig;
use crate::content::{self, JsonObject};
use crate::error::{Error, Result};
use crate::webhook::WebhookClient;

/// Build the request body for the given contexts.
pub fn request_body(github: &JsonObject, job: &JsonObject, now: DateTime<Utc>) -> Result<Vec<u8>> {
    let content = content::build_content(github, job, now);
    Ok(cards::render(&content)?)
}

/// Render the notification for `config` and POST it to the webhook.
///
/// Delivery is abandoned with [`Error::Interrupted`] if the process
/// receives SIGINT or SIGTERM first.
pub async fn send_notification(config: &NotifierConfig, now: DateTime<Utc>) -> Result<()> {
    deliver(config, now, shutdown_signal()).await
}

async fn deliver<S>(config: &NotifierConfig, now: DateTime<Utc>, shutdown: S) -> Result<()>
where
    S: Future<Output = ()>,
{
    let body = request_body(&config.github, &config.job, now)?;
    tracing::info!(
        host = %config.webhook_host(),
        bytes = body.len(),
        "Sending workflow notification"
    );

    let client = WebhookClient::new(&config.webhook_url);
    tokio::select! {
        res = client.send(body) => Ok(res?),
        () = shutdown => {
            tracing::warn!("Shutdown signal received, notification not sent");
            Err(Error::Interrupted)
        }
    }
}

/// Resolves on SIGINT or, on unix, SIGTERM. A handler that cannot be
/// installed never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
