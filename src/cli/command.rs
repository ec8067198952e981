//! Parsing of interactive input lines.

use std::path::PathBuf;

pub const HELP: &str = "\
Commands:
  @<agent_id> <prompt>   talk to an agent (starts the conversation on first use)
  <prompt>               talk to the active agent
  \\agents                list available agents
  \\agent <agent_id>      show an agent's configuration
  \\upload <path>         upload a file to attach to the next new conversation
  \\help                  show this help
  \\exit                  quit";

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Empty,
    Exit,
    Help,
    ListAgents,
    ShowAgent(String),
    Upload(PathBuf),
    Prompt { agent: Option<String>, text: String },
    Usage(&'static str),
    Unknown(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }

        if let Some(rest) = line.strip_prefix('\\') {
            let (name, arg) = split_word(rest);
            return match (name, arg) {
                ("exit" | "quit", _) => Self::Exit,
                ("help", _) => Self::Help,
                ("agents", _) => Self::ListAgents,
                ("agent", "") => Self::Usage("\\agent <agent_id>"),
                ("agent", id) => Self::ShowAgent(id.to_string()),
                ("upload", "") => Self::Usage("\\upload <path>"),
                ("upload", path) => Self::Upload(PathBuf::from(path)),
                _ => Self::Unknown(line.to_string()),
            };
        }

        if let Some(rest) = line.strip_prefix('@') {
            let (agent, text) = split_word(rest);
            if agent.is_empty() {
                return Self::Unknown(line.to_string());
            }
            return Self::Prompt {
                agent: Some(agent.to_string()),
                text: text.to_string(),
            };
        }

        Self::Prompt {
            agent: None,
            text: line.to_string(),
        }
    }
}

/// First whitespace-delimited word and the trimmed remainder.
fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}
