//! Convenience re-exports for common use.

pub use crate::client::DustClient;
pub use crate::config::DustConfig;
pub use crate::error::{DustError, Result};
pub use crate::session::{ConversationApi, ConversationSession, PromptOutcome, SessionState};
pub use crate::types::{AgentReply, AgentSummary};
