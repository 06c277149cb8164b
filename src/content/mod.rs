//! Message content — derives the display fields of a notification from the
//! GitHub event context and job context.

pub mod event;
pub mod fields;

use chrono::{DateTime, Utc};

pub use event::EventKind;
pub use fields::JsonObject;

/// Header icon for successful runs and for issue/release events.
pub const SUCCESS_HEADER_ICON_URL: &str = "https://github.githubassets.com/favicons/favicon.png";
/// Header icon for failed, cancelled or status-less runs.
pub const FAILURE_HEADER_ICON_URL: &str =
    "https://github.githubassets.com/favicons/favicon-failure.png";

/// Fully resolved display fields of one notification.
///
/// Every field is populated (possibly with an empty string), so the
/// renderer never has to deal with missing data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContent {
    pub title: String,
    /// Secondary header line; may contain `<b>` markup.
    pub subtitle: String,
    pub git_ref: String,
    pub triggering_actor: String,
    /// RFC 3339 timestamp, shown as UTC.
    pub timestamp: String,
    /// Target of the card's button.
    pub click_url: String,
    pub header_icon_url: String,
    /// Normalized event label: `issue`, `release` or `workflow`.
    pub event_name: String,
    pub repo: String,
}

/// Build the content record for the event described by `github` and `job`.
///
/// `now` is only used for generic workflow events, which have no natural
/// timestamp of their own. Never fails: malformed fields become empty.
pub fn build_content(github: &JsonObject, job: &JsonObject, now: DateTime<Utc>) -> MessageContent {
    let kind = EventKind::classify(github);
    tracing::debug!(kind = kind.label(), "Classified triggering event");
    kind.build(github, job, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::{Value, json};

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 4, 25, 17, 44, 57).unwrap()
    }

    fn workflow_github() -> JsonObject {
        object(json!({
            "workflow": "test-workflow",
            "ref": "test-ref",
            "triggering_actor": "test-triggered_actor",
            "repository": "test-repository",
            "run_id": "test-run-id",
        }))
    }

    #[test]
    fn success_workflow() {
        let job = object(json!({ "status": "success" }));
        let content = build_content(&workflow_github(), &job, now());
        assert_eq!(
            content,
            MessageContent {
                title: "GitHub workflow success".into(),
                subtitle: "Workflow: <b>test-workflow</b>".into(),
                git_ref: "test-ref".into(),
                triggering_actor: "test-triggered_actor".into(),
                timestamp: "2023-04-25T17:44:57Z".into(),
                click_url: "/test-repository/actions/runs/test-run-id".into(),
                header_icon_url: SUCCESS_HEADER_ICON_URL.into(),
                event_name: "workflow".into(),
                repo: "test-repository".into(),
            }
        );
    }

    #[test]
    fn failed_workflow_differs_only_in_title_and_icon() {
        let success = build_content(&workflow_github(), &object(json!({ "status": "success" })), now());
        let failure = build_content(&workflow_github(), &object(json!({ "status": "failure" })), now());
        assert_eq!(failure.title, "GitHub workflow failure");
        assert_eq!(failure.header_icon_url, FAILURE_HEADER_ICON_URL);
        assert_eq!(
            MessageContent {
                title: success.title.clone(),
                header_icon_url: success.header_icon_url.clone(),
                ..failure
            },
            success
        );
    }

    #[test]
    fn issue_event() {
        let github = object(json!({
            "workflow": "test-workflow",
            "ref": "test-ref",
            "triggering_actor": "test-triggered_actor",
            "repository": "test-repository",
            "event_name": "issues",
            "event": {
                "action": "opened",
                "issue": {
                    "title": "test-title",
                    "created_at": "2023-04-25T17:44:57Z",
                    "html_url": "https://foo.com",
                },
            },
        }));
        let content = build_content(&github, &JsonObject::new(), now());
        assert_eq!(content.title, "A issue is opened");
        assert_eq!(content.subtitle, "Issue title: <b>test-title</b>");
        assert_eq!(content.timestamp, "2023-04-25T17:44:57Z");
        assert_eq!(content.click_url, "https://foo.com");
        assert_eq!(content.event_name, "issue");
        assert_eq!(content.header_icon_url, SUCCESS_HEADER_ICON_URL);
        assert_eq!(content.repo, "test-repository");
    }

    #[test]
    fn release_event() {
        let github = object(json!({
            "ref": "test-ref",
            "event_name": "release",
            "event": {
                "action": "released",
                "release": {
                    "name": "test-title",
                    "created_at": "2023-05-01T08:00:00Z",
                    "html_url": "https://foo.com",
                },
            },
        }));
        let content = build_content(&github, &object(json!({ "status": "failure" })), now());
        assert_eq!(content.title, "A release is released");
        assert_eq!(content.subtitle, "Release name: <b>test-title</b>");
        assert_eq!(content.timestamp, "2023-05-01T08:00:00Z");
        assert_eq!(content.event_name, "release");
        assert_eq!(content.header_icon_url, SUCCESS_HEADER_ICON_URL);
        assert_eq!(content.git_ref, "test-ref");
    }

    #[test]
    fn empty_contexts_yield_empty_fields() {
        let content = build_content(&JsonObject::new(), &JsonObject::new(), now());
        assert_eq!(content.git_ref, "");
        assert_eq!(content.triggering_actor, "");
        assert_eq!(content.repo, "");
        assert_eq!(content.event_name, "workflow");
    }

    #[test]
    fn deterministic_for_fixed_inputs() {
        let job = object(json!({ "status": "success" }));
        assert_eq!(
            build_content(&workflow_github(), &job, now()),
            build_content(&workflow_github(), &job, now())
        );
    }
}
