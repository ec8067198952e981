//! CLI entry point for dust-cli.

pub mod command;
pub mod output;
pub mod repl;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::documents::DEFAULT_DOCUMENT_EXTENSION;

/// Dust command-line client
#[derive(Parser, Debug)]
#[command(name = "dust", version, about = "Talk to Dust agents and feed their data sources")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level CLI commands. Without one, the interactive chat starts.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive chat with agents
    Chat,
    /// List available agents
    Agents,
    /// Show one agent's full configuration
    Agent(AgentArgs),
    /// Send a single prompt to an agent
    Ask(AskArgs),
    /// Upload every matching file under a directory as a document
    Publish(PublishArgs),
}

#[derive(Parser, Debug)]
pub struct AgentArgs {
    /// Agent configuration id
    pub agent_id: String,
}

#[derive(Parser, Debug)]
pub struct AskArgs {
    /// Agent configuration id
    pub agent_id: String,

    /// Prompt text (remaining arguments are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub prompt: Vec<String>,

    /// File to attach to the conversation
    #[arg(short, long)]
    pub attach: Option<PathBuf>,
}

impl AskArgs {
    pub fn prompt_text(&self) -> String {
        self.prompt.join(" ")
    }
}

#[derive(Parser, Debug)]
pub struct PublishArgs {
    /// Directory to scan recursively
    pub dir: PathBuf,

    /// File extension to pick up
    #[arg(short, long, default_value = DEFAULT_DOCUMENT_EXTENSION)]
    pub extension: String,
}
