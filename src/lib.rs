//! dust-cli: a small client for the Dust assistant API.
//!
//! Covers three workflows: publishing local text files into a data source,
//! browsing agent configurations, and holding a conversation with an agent
//! (optionally seeded with an uploaded file).
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use dust_cli::prelude::*;
//!
//! # async fn example() -> dust_cli::error::Result<()> {
//! let client = Arc::new(DustClient::new(DustConfig::from_env()?)?);
//! let mut session = ConversationSession::new(client.clone(), client.config().message_context());
//! let outcome = session.prompt(Some("helper"), "Hello!").await?;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```

pub mod agents;
pub mod client;
pub mod config;
pub mod documents;
pub mod error;
pub mod files;
pub mod prelude;
pub mod session;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
