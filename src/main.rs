use clap::Parser;

use send_google_chat_webhook::cli::Cli;

#[tokio::main]
async fn main() {
    // Logs go to stderr so the workflow's stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = cli.execute().await {
        tracing::debug!(error = ?e, "Notification failed");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
