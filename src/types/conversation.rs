//! Conversation request and response bodies.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_TIMEZONE, DEFAULT_USERNAME};

/// Message `type` tag the API uses for agent-authored messages.
pub const AGENT_MESSAGE_TYPE: &str = "agent_message";

/// Title given to the content fragment that carries an uploaded file.
pub const ATTACHMENT_FRAGMENT_TITLE: &str = "Uploaded file";

/// Client identity sent with each user message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageContext {
    pub username: String,
    pub timezone: String,
}

impl Default for MessageContext {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mention {
    pub configuration_id: String,
}

/// A user message addressed to one agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserMessage {
    pub content: String,
    pub mentions: Vec<Mention>,
    pub context: MessageContext,
}

impl UserMessage {
    pub fn new(content: impl Into<String>, agent_id: impl Into<String>, context: MessageContext) -> Self {
        Self {
            content: content.into(),
            mentions: vec![Mention {
                configuration_id: agent_id.into(),
            }],
            context,
        }
    }
}

/// Reference to a previously uploaded file, attached to a new conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentFragment {
    pub title: String,
    pub file_id: String,
}

impl ContentFragment {
    pub fn uploaded_file(file_id: impl Into<String>) -> Self {
        Self {
            title: ATTACHMENT_FRAGMENT_TITLE.to_string(),
            file_id: file_id.into(),
        }
    }
}

/// Body of `POST /assistant/conversations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConversationRequest {
    pub message: UserMessage,
    pub blocking: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_fragments: Option<Vec<ContentFragment>>,
}

impl CreateConversationRequest {
    pub fn new(message: UserMessage, attachment: Option<ContentFragment>) -> Self {
        Self {
            message,
            blocking: true,
            content_fragments: attachment.map(|fragment| vec![fragment]),
        }
    }
}

/// Body of `POST /assistant/conversations/{id}/messages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageRequest {
    #[serde(flatten)]
    pub message: UserMessage,
    pub blocking: bool,
}

impl MessageRequest {
    pub fn blocking(message: UserMessage) -> Self {
        Self {
            message,
            blocking: true,
        }
    }
}

/// One message as returned inside a conversation payload.
///
/// Only the fields needed to find the reply are modelled; everything else the
/// API returns is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConversationMessage {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(rename = "sId", default)]
    pub s_id: Option<String>,
    #[serde(default)]
    pub content: Option<serde_json::Value>,
}

impl ConversationMessage {
    /// Text of this message if it is an agent message with non-empty content.
    pub fn agent_text(&self) -> Option<&str> {
        if self.kind.as_deref() != Some(AGENT_MESSAGE_TYPE) {
            return None;
        }
        self.content
            .as_ref()
            .and_then(|c| c.as_str())
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Conversation {
    #[serde(rename = "sId")]
    pub s_id: String,
    #[serde(default)]
    pub content: Vec<Vec<ConversationMessage>>,
}

/// Response of conversation creation: messages arrive as nested groups.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreationResponse {
    pub conversation: Conversation,
}

impl CreationResponse {
    pub fn conversation_id(&self) -> &str {
        &self.conversation.s_id
    }
}

/// Response of posting to an existing conversation: a flat list of agent messages.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuationResponse {
    #[serde(default)]
    pub agent_messages: Vec<ConversationMessage>,
}

/// Uniform access to the agent's answer across response shapes.
pub trait AgentReply {
    fn first_agent_reply(&self) -> Option<&str>;
}

impl AgentReply for CreationResponse {
    fn first_agent_reply(&self) -> Option<&str> {
        self.conversation
            .content
            .iter()
            .flatten()
            .find_map(ConversationMessage::agent_text)
    }
}

impl AgentReply for ContinuationResponse {
    fn first_agent_reply(&self) -> Option<&str> {
        self.agent_messages
            .iter()
            .find_map(ConversationMessage::agent_text)
    }
}
