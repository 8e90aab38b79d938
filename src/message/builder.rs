//! Fluent assembly API for [`SlackMessage`] values.

use super::{Block, ButtonStyle, Element, SlackMessage, TextObject, MAX_SECTION_FIELDS};

/// Chainable accumulator over one message.
///
/// Every method takes the builder by value and returns it, so a message is
/// written as a single expression; [`build`](MessageBuilder::build) consumes
/// the builder and hands the finished message to the caller. Blocks render
/// in the order they were appended.
///
/// # Examples
///
/// ```
/// use slack_reporter::message::MessageBuilder;
///
/// let message = MessageBuilder::new()
///     .add_header("Nightly results")
///     .add_section("*All suites green.*")
///     .build();
///
/// assert_eq!(message.blocks.len(), 2);
/// ```
#[derive(Debug)]
pub struct MessageBuilder {
    message: SlackMessage,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self {
            message: SlackMessage::new(),
        }
    }

    pub fn with_channel(channel: impl Into<String>) -> Self {
        Self::new().channel(channel)
    }

    /// Sets the target channel. Last write wins.
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.message.channel = Some(channel.into());
        self
    }

    /// Sets the plain-text notification fallback. Last write wins.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.message.text = Some(text.into());
        self
    }

    /// Marks the message as a reply to the thread rooted at `ts`.
    pub fn thread_ts(mut self, ts: impl Into<String>) -> Self {
        self.message.thread_ts = Some(ts.into());
        self
    }

    /// Appends a header block. Header text is always plain with emoji
    /// rendering enabled.
    pub fn add_header(mut self, text: impl Into<String>) -> Self {
        self.message.blocks.push(Block::Header {
            text: TextObject::plain_emoji(text),
        });
        self
    }

    /// Appends a section block with mrkdwn text.
    pub fn add_section(mut self, text: impl Into<String>) -> Self {
        self.message
            .blocks
            .push(Block::section(TextObject::mrkdwn(text)));
        self
    }

    /// Appends a section block with plain text.
    pub fn add_plain_section(mut self, text: impl Into<String>) -> Self {
        self.message
            .blocks
            .push(Block::section(TextObject::plain(text)));
        self
    }

    /// Appends one context block whose elements are the given texts as
    /// mrkdwn objects, in order.
    pub fn add_context<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let elements = texts.into_iter().map(TextObject::mrkdwn).collect();
        self.message.blocks.push(Block::Context { elements });
        self
    }

    pub fn add_divider(mut self) -> Self {
        self.message.blocks.push(Block::Divider);
        self
    }

    /// Appends an actions block containing a single url-button.
    pub fn add_button(
        self,
        label: impl Into<String>,
        url: impl Into<String>,
        style: ButtonStyle,
    ) -> Self {
        self.add_buttons([ButtonSpec::new(label).url(url).style(style)])
    }

    /// Appends ONE actions block containing all given buttons in argument
    /// order. Calling [`add_button`](Self::add_button) repeatedly would
    /// instead create one actions block per button.
    pub fn add_buttons<I>(mut self, buttons: I) -> Self
    where
        I: IntoIterator<Item = ButtonSpec>,
    {
        let elements = buttons.into_iter().map(ButtonSpec::into_element).collect();
        self.message.blocks.push(Block::Actions { elements });
        self
    }

    /// Appends a table as alternating fields-section/divider pairs: one
    /// section of bold header fields followed by a divider, then per row a
    /// section of that row's cells followed by a divider.
    ///
    /// Rows longer than the header are truncated to the header count; rows
    /// shorter than the header render the cells they have. Headers beyond
    /// the platform's per-section field cap are dropped with the same
    /// truncation rule.
    pub fn add_table<S: AsRef<str>>(mut self, headers: &[S], rows: &[Vec<String>]) -> Self {
        let width = headers.len().min(MAX_SECTION_FIELDS);
        let header_fields = headers
            .iter()
            .take(width)
            .map(|h| TextObject::mrkdwn(format!("*{}*", h.as_ref())))
            .collect();
        self.message.blocks.push(Block::fields_section(header_fields));
        self = self.add_divider();

        for row in rows {
            let row_fields = row
                .iter()
                .take(width)
                .map(|cell| TextObject::mrkdwn(cell.clone()))
                .collect();
            self.message.blocks.push(Block::fields_section(row_fields));
            self = self.add_divider();
        }
        self
    }

    /// Appends an arbitrary pre-built block. Escape hatch for shapes the
    /// convenience methods do not cover.
    pub fn add_custom_block(mut self, block: Block) -> Self {
        self.message.blocks.push(block);
        self
    }

    /// Consumes the builder and returns the finished message.
    pub fn build(self) -> SlackMessage {
        self.message
    }
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Declarative description of one button inside an actions block.
#[derive(Debug, Clone)]
pub struct ButtonSpec {
    label: String,
    url: Option<String>,
    action_id: Option<String>,
    style: ButtonStyle,
    value: Option<String>,
}

impl ButtonSpec {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: None,
            action_id: None,
            style: ButtonStyle::Default,
            value: None,
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    fn into_element(self) -> Element {
        Element::Button {
            text: TextObject::plain(self.label),
            url: self.url,
            action_id: self.action_id,
            style: self.style,
            value: self.value,
        }
    }
}
