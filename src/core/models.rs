use serde::Deserialize;

/// One inbound chat message, as found in the `event` object of an
/// `event_callback` payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MessageEvent {
    #[serde(default)]
    pub text: Option<String>,
    pub channel: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub ts: Option<String>,
    // Set on messages posted by bots, including our own replies
    #[serde(default)]
    pub bot_id: Option<String>,
    #[serde(default)]
    pub subtype: Option<String>,
}

impl MessageEvent {
    #[must_use]
    pub fn new(text: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            channel: channel.into(),
            ..Self::default()
        }
    }
}

/// A reply to post back into a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub text: String,
    pub channel: String,
}
