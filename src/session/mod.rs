//! Conversation session: one lazily created conversation per process.
//!
//! The first prompt creates the conversation (sending any pending
//! attachment); every later prompt is posted to it. The conversation id is
//! set once and never replaced.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use strum::Display;
use tracing::{debug, warn};

use crate::error::{DustError, Result};
use crate::types::{
    AgentReply, ContentFragment, ContinuationResponse, CreateConversationRequest,
    CreationResponse, MessageContext, MessageRequest, UserMessage,
};

/// Remote operations a session depends on.
#[async_trait]
pub trait ConversationApi: Send + Sync {
    async fn create_conversation(
        &self,
        request: &CreateConversationRequest,
    ) -> Result<CreationResponse>;

    async fn continue_conversation(
        &self,
        conversation_id: &str,
        request: &MessageRequest,
    ) -> Result<ContinuationResponse>;

    /// Upload a local file and return its attachment id.
    async fn upload_attachment(&self, path: &Path) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SessionState {
    NoConversation,
    Active,
}

/// Result of a prompt that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Reply { agent: String, text: String },
    NoReply { agent: String },
}

pub struct ConversationSession {
    api: Arc<dyn ConversationApi>,
    context: MessageContext,
    conversation_id: Option<String>,
    active_agent: Option<String>,
    attachment: Option<String>,
}

impl ConversationSession {
    pub fn new(api: Arc<dyn ConversationApi>, context: MessageContext) -> Self {
        Self {
            api,
            context,
            conversation_id: None,
            active_agent: None,
            attachment: None,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.conversation_id.is_some() {
            SessionState::Active
        } else {
            SessionState::NoConversation
        }
    }

    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation_id.as_deref()
    }

    pub fn active_agent(&self) -> Option<&str> {
        self.active_agent.as_deref()
    }

    /// Attachment id waiting to be sent with the conversation-creating prompt.
    pub fn attachment(&self) -> Option<&str> {
        self.attachment.as_deref()
    }

    /// Send `text` to `agent`, or to the active agent when `agent` is `None`.
    ///
    /// An explicit agent becomes the active agent. On failure the
    /// conversation state is left as it was.
    pub async fn prompt(&mut self, agent: Option<&str>, text: &str) -> Result<PromptOutcome> {
        let agent = match agent {
            Some(agent) if agent.trim().is_empty() => {
                return Err(DustError::InvalidArgument("Agent id cannot be empty".to_string()))
            }
            Some(agent) => {
                self.active_agent = Some(agent.to_string());
                agent.to_string()
            }
            None => self.active_agent.clone().ok_or(DustError::NoActiveAgent)?,
        };

        let message = UserMessage::new(text, agent.as_str(), self.context.clone());
        let reply = match self.conversation_id.clone() {
            None => self.create(message).await?,
            Some(conversation_id) => {
                debug!(%conversation_id, %agent, "Continuing conversation");
                let response = self
                    .api
                    .continue_conversation(&conversation_id, &MessageRequest::blocking(message))
                    .await?;
                response.first_agent_reply().map(str::to_owned)
            }
        };

        Ok(match reply {
            Some(text) => PromptOutcome::Reply { agent, text },
            None => PromptOutcome::NoReply { agent },
        })
    }

    async fn create(&mut self, message: UserMessage) -> Result<Option<String>> {
        let fragment = self.attachment.as_deref().map(ContentFragment::uploaded_file);
        let request = CreateConversationRequest::new(message, fragment);
        let response = self.api.create_conversation(&request).await?;

        debug!(conversation_id = response.conversation_id(), "Conversation created");
        self.conversation_id = Some(response.conversation_id().to_string());
        self.attachment = None;

        Ok(response.first_agent_reply().map(str::to_owned))
    }

    /// Upload `path` and hold the result as the pending attachment.
    ///
    /// A failed upload clears the pending attachment and returns `None`.
    pub async fn upload_and_attach(&mut self, path: &Path) -> Option<&str> {
        self.attachment = match self.api.upload_attachment(path).await {
            Ok(file_id) => Some(file_id),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Attachment upload failed");
                None
            }
        };
        self.attachment.as_deref()
    }
}
