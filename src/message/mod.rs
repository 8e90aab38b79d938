//! Block Kit message document model.
//!
//! A [`SlackMessage`] is an ordered sequence of typed [`Block`]s plus the
//! envelope fields `chat.postMessage` expects. Values are assembled through
//! [`MessageBuilder`](builder::MessageBuilder) and serialized once on send;
//! absent optional fields are omitted from the payload rather than emitted
//! as null.

use serde::Serialize;

pub mod builder;

pub use builder::{ButtonSpec, MessageBuilder};

/// Slack caps a section block at this many fields.
pub const MAX_SECTION_FIELDS: usize = 10;

/// One complete outbound message.
///
/// Blocks render in insertion order; nothing reorders or deduplicates them.
#[derive(Debug, Clone, Serialize)]
pub struct SlackMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,

    /// Plain-text fallback shown in notifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<String>,

    pub blocks: Vec<Block>,
}

impl SlackMessage {
    pub(crate) fn new() -> Self {
        Self {
            channel: None,
            text: None,
            thread_ts: None,
            blocks: Vec::new(),
        }
    }
}

/// A typed visual unit within a message.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header {
        text: TextObject,
    },
    Section {
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<TextObject>,
        #[serde(skip_serializing_if = "Option::is_none")]
        fields: Option<Vec<TextObject>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        accessory: Option<Element>,
        #[serde(skip_serializing_if = "Option::is_none")]
        block_id: Option<String>,
    },
    Divider,
    Context {
        elements: Vec<TextObject>,
    },
    Actions {
        elements: Vec<Element>,
    },
}

impl Block {
    /// Section carrying a single text object and nothing else.
    pub fn section(text: TextObject) -> Self {
        Block::Section {
            text: Some(text),
            fields: None,
            accessory: None,
            block_id: None,
        }
    }

    /// Section carrying only fields, as used for tabular layouts.
    pub fn fields_section(fields: Vec<TextObject>) -> Self {
        Block::Section {
            text: None,
            fields: Some(fields),
            accessory: None,
            block_id: None,
        }
    }
}

/// A styled string with an explicit markup kind.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    PlainText {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        emoji: Option<bool>,
    },
    Mrkdwn {
        text: String,
    },
}

impl TextObject {
    pub fn plain(text: impl Into<String>) -> Self {
        TextObject::PlainText {
            text: text.into(),
            emoji: None,
        }
    }

    /// Plain text with emoji rendering enabled, as header blocks require.
    pub fn plain_emoji(text: impl Into<String>) -> Self {
        TextObject::PlainText {
            text: text.into(),
            emoji: Some(true),
        }
    }

    pub fn mrkdwn(text: impl Into<String>) -> Self {
        TextObject::Mrkdwn { text: text.into() }
    }
}

/// An interactive sub-component of a block. Buttons are the only kind the
/// report layer emits today.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Button {
        text: TextObject,
        #[serde(skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        action_id: Option<String>,
        #[serde(skip_serializing_if = "ButtonStyle::is_default")]
        style: ButtonStyle,
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
}

/// Visual style of a button. `Default` is Slack's implicit style and is
/// omitted from the wire payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    #[default]
    Default,
    Primary,
    Danger,
}

impl ButtonStyle {
    fn is_default(&self) -> bool {
        matches!(self, ButtonStyle::Default)
    }
}
