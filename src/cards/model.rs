//! Google Chat `cardsV2` wire model.
//!
//! Only the subset of the card schema the notifier emits. Field order in
//! these structs is the key order of the serialized JSON.

use serde::Serialize;

/// Top-level request body posted to the webhook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardMessage {
    #[serde(rename = "cardsV2")]
    pub cards_v2: CardWithId,
}

/// A card together with its identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardWithId {
    pub card_id: String,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub header: CardHeader,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardHeader {
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
}

/// A group of widgets. When `collapsible`, only the first
/// `uncollapsible_widgets_count` widgets stay visible while collapsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub collapsible: bool,
    pub uncollapsible_widgets_count: u32,
    pub widgets: Vec<Widget>,
}

/// Serialized externally tagged: `{"decoratedText": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Widget {
    DecoratedText(DecoratedText),
    ButtonList(ButtonList),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoratedText {
    pub start_icon: Icon,
    /// May contain simple HTML markup.
    pub text: String,
}

/// Either a custom icon image or one of Chat's built-in icons.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Icon {
    IconUrl(String),
    KnownIcon(KnownIcon),
}

/// Built-in Chat icons used by the notifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KnownIcon {
    Person,
    Clock,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonList {
    pub buttons: Vec<Button>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    pub text: String,
    pub on_click: OnClick,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnClick {
    pub open_link: OpenLink,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenLink {
    pub url: String,
}
