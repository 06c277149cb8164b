//! Triggering-event classification and per-kind content construction.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use super::fields::{JsonObject, object_field, str_field};
use super::{FAILURE_HEADER_ICON_URL, MessageContent, SUCCESS_HEADER_ICON_URL};

const EVENT_NAME_KEY: &str = "event_name";
const EVENT_KEY: &str = "event";
const EVENT_ACTION_KEY: &str = "action";
const REF_KEY: &str = "ref";
const REPOSITORY_KEY: &str = "repository";
const TRIGGERING_ACTOR_KEY: &str = "triggering_actor";
const WORKFLOW_KEY: &str = "workflow";
const RUN_ID_KEY: &str = "run_id";
const SERVER_URL_KEY: &str = "server_url";
const HTML_URL_KEY: &str = "html_url";
const CREATED_AT_KEY: &str = "created_at";
const JOB_STATUS_KEY: &str = "status";

/// What triggered the workflow, as far as the card is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// `event_name == "issues"`.
    Issue,
    /// `event_name == "release"`.
    Release,
    /// Anything else, including a missing `event_name`.
    Workflow,
}

impl EventKind {
    /// Classify an event context by exact match on `event_name`.
    pub fn classify(github: &JsonObject) -> Self {
        match str_field(github, EVENT_NAME_KEY).as_str() {
            "issues" => Self::Issue,
            "release" => Self::Release,
            _ => Self::Workflow,
        }
    }

    /// Label shown on the card's button ("Open issue", ...).
    pub fn label(self) -> &'static str {
        match self {
            Self::Issue => "issue",
            Self::Release => "release",
            Self::Workflow => "workflow",
        }
    }

    /// Build the content record for this kind of event.
    pub fn build(self, github: &JsonObject, job: &JsonObject, now: DateTime<Utc>) -> MessageContent {
        match self {
            Self::Issue => issue_content(github),
            Self::Release => release_content(github),
            Self::Workflow => workflow_content(github, job, now),
        }
    }
}

fn issue_content(github: &JsonObject) -> MessageContent {
    let event = object_field(github, EVENT_KEY);
    let issue = object_field(&event, "issue");
    MessageContent {
        title: format!("A issue is {}", str_field(&event, EVENT_ACTION_KEY)),
        subtitle: format!("Issue title: <b>{}</b>", str_field(&issue, "title")),
        git_ref: str_field(github, REF_KEY),
        triggering_actor: str_field(github, TRIGGERING_ACTOR_KEY),
        timestamp: str_field(&issue, CREATED_AT_KEY),
        click_url: str_field(&issue, HTML_URL_KEY),
        header_icon_url: SUCCESS_HEADER_ICON_URL.to_string(),
        event_name: EventKind::Issue.label().to_string(),
        repo: str_field(github, REPOSITORY_KEY),
    }
}

fn release_content(github: &JsonObject) -> MessageContent {
    let event = object_field(github, EVENT_KEY);
    let release = object_field(&event, "release");
    MessageContent {
        title: format!("A release is {}", str_field(&event, EVENT_ACTION_KEY)),
        subtitle: format!("Release name: <b>{}</b>", str_field(&release, "name")),
        git_ref: str_field(github, REF_KEY),
        triggering_actor: str_field(github, TRIGGERING_ACTOR_KEY),
        timestamp: str_field(&release, CREATED_AT_KEY),
        click_url: str_field(&release, HTML_URL_KEY),
        header_icon_url: SUCCESS_HEADER_ICON_URL.to_string(),
        event_name: EventKind::Release.label().to_string(),
        repo: str_field(github, REPOSITORY_KEY),
    }
}

fn workflow_content(github: &JsonObject, job: &JsonObject, now: DateTime<Utc>) -> MessageContent {
    let repo = str_field(github, REPOSITORY_KEY);
    let click_url = format!(
        "{}/{}/actions/runs/{}",
        str_field(github, SERVER_URL_KEY),
        repo,
        str_field(github, RUN_ID_KEY)
    );

    MessageContent {
        title: format!("GitHub workflow {}", str_field(job, JOB_STATUS_KEY)),
        subtitle: format!("Workflow: <b>{}</b>", str_field(github, WORKFLOW_KEY)),
        git_ref: str_field(github, REF_KEY),
        triggering_actor: str_field(github, TRIGGERING_ACTOR_KEY),
        // Event payloads disagree on where the timestamp lives, so generic
        // runs are stamped with the time the notification is built.
        timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        click_url,
        header_icon_url: workflow_header_icon(job).to_string(),
        event_name: EventKind::Workflow.label().to_string(),
        repo,
    }
}

/// Failure icon when the job status is missing, `failure` or `canceled`.
/// Any other value, including an unrecognized one, gets the success icon.
fn workflow_header_icon(job: &JsonObject) -> &'static str {
    match job.get(JOB_STATUS_KEY) {
        None => FAILURE_HEADER_ICON_URL,
        Some(Value::String(status)) if status == "failure" || status == "canceled" => {
            FAILURE_HEADER_ICON_URL
        }
        Some(_) => SUCCESS_HEADER_ICON_URL,
    }
}
