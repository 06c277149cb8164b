//! Command-line surface.

use chrono::Utc;
use clap::{Args, Parser, Subcommand};

use crate::config::NotifierConfig;
use crate::error::Result;
use crate::notify;

#[derive(Parser, Debug)]
#[command(name = "send-google-chat-webhook", version, about = "Send GitHub notifications to Google Chat")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Google Chat commands
    #[command(subcommand)]
    Chat(ChatCommand),
}

#[derive(Subcommand, Debug)]
pub enum ChatCommand {
    /// Send a message to a Google Chat space
    #[command(
        name = "workflownotification",
        long_about = "The chat command sends messages to Google Chat spaces.\n\n\
                      Reads the GITHUB_CONTEXT and JOB_CONTEXT environment variables."
    )]
    WorkflowNotification(WorkflowNotificationArgs),
}

#[derive(Args, Debug)]
pub struct WorkflowNotificationArgs {
    /// Webhook URL from google chat
    #[arg(
        long,
        value_name = "URL",
        long_help = "Webhook URL from google chat, e.g. \
                     https://chat.googleapis.com/v1/spaces/<SPACE_ID>/messages?key=<KEY>&token=<TOKEN>"
    )]
    pub webhook_url: String,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Command::Chat(ChatCommand::WorkflowNotification(args)) => args.execute().await,
        }
    }
}

impl WorkflowNotificationArgs {
    pub async fn execute(self) -> Result<()> {
        let config = NotifierConfig::from_env(&self.webhook_url)?;
        notify::send_notification(&config, Utc::now()).await
    }
}
