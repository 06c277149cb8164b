//! Renders a [`MessageContent`] into the card payload posted to Chat.

use crate::content::MessageContent;
use crate::error::RenderError;

use super::model::{
    Button, ButtonList, Card, CardHeader, CardMessage, CardWithId, DecoratedText, Icon, KnownIcon,
    OnClick, OpenLink, Section, Widget,
};

/// Fixed identifier of the single card in every message.
pub const CARD_ID: &str = "createCardMessage";

/// Icon next to the repo and ref lines.
pub const WIDGET_REF_ICON_URL: &str =
    "https://fonts.gstatic.com/s/i/short-term/release/googlesymbols/quick_reference/default/48px.svg";

/// Build the card message: one card, one collapsible section, five widgets.
pub fn card_message(content: &MessageContent) -> CardMessage {
    let widgets = vec![
        decorated_text(
            Icon::IconUrl(WIDGET_REF_ICON_URL.to_string()),
            "Repo",
            &content.repo,
        ),
        decorated_text(
            Icon::IconUrl(WIDGET_REF_ICON_URL.to_string()),
            "Ref",
            &content.git_ref,
        ),
        decorated_text(
            Icon::KnownIcon(KnownIcon::Person),
            "Actor",
            &content.triggering_actor,
        ),
        decorated_text(Icon::KnownIcon(KnownIcon::Clock), "UTC", &content.timestamp),
        Widget::ButtonList(ButtonList {
            buttons: vec![Button {
                text: format!("Open {}", content.event_name),
                on_click: OnClick {
                    open_link: OpenLink {
                        url: content.click_url.clone(),
                    },
                },
            }],
        }),
    ];

    CardMessage {
        cards_v2: CardWithId {
            card_id: CARD_ID.to_string(),
            card: Card {
                header: CardHeader {
                    title: content.title.clone(),
                    subtitle: content.subtitle.clone(),
                    image_url: content.header_icon_url.clone(),
                },
                sections: vec![Section {
                    collapsible: true,
                    uncollapsible_widgets_count: 1,
                    widgets,
                }],
            },
        },
    }
}

/// Serialize the card message for `content` to JSON bytes.
pub fn render(content: &MessageContent) -> Result<Vec<u8>, RenderError> {
    let body = serde_json::to_vec(&card_message(content))?;
    Ok(body)
}

fn decorated_text(start_icon: Icon, label: &str, value: &str) -> Widget {
    Widget::DecoratedText(DecoratedText {
        start_icon,
        text: format!("<b>{label}: </b> {value}"),
    })
}
