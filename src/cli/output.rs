//! User-facing rendering of results and errors.

use std::path::Path;

use crate::documents::PublishReport;
use crate::error::{DustError, ErrorCategory};
use crate::session::{PromptOutcome, SessionState};
use crate::types::AgentSummary;

pub const NO_REPLY: &str = "No agent reply found in the response.";

pub fn format_outcome(outcome: &PromptOutcome) -> String {
    match outcome {
        PromptOutcome::Reply { agent, text } => format!("Agent ({agent}): {text}"),
        PromptOutcome::NoReply { .. } => NO_REPLY.to_string(),
    }
}

pub fn format_agents(agents: &[AgentSummary]) -> String {
    let mut out = String::from("Available agents:");
    for agent in agents {
        out.push_str(&format!("\n{}: {}", agent.s_id, agent.name));
    }
    out
}

pub fn format_agent_details(agent_id: &str, details: &serde_json::Value) -> String {
    let pretty = serde_json::to_string_pretty(details).unwrap_or_else(|_| details.to_string());
    format!("Details for agent {agent_id}:\n{pretty}")
}

/// Result line for `\upload`. Attachments only travel with the message that
/// opens a conversation, so an active one never sees the file.
pub fn format_upload(path: &Path, file_id: Option<&str>, state: SessionState) -> String {
    match (file_id, state) {
        (None, _) => format!("Upload of {} failed; continuing without attachment", path.display()),
        (Some(id), SessionState::NoConversation) => format!("Uploaded {} as {id}", path.display()),
        (Some(id), SessionState::Active) => format!(
            "Uploaded {} as {id}\nNote: a conversation is already open; \
             the file will not be sent with it.",
            path.display()
        ),
    }
}

pub fn format_publish_report(report: &PublishReport) -> String {
    let mut out = String::new();
    for title in &report.published {
        out.push_str(&format!("Successfully uploaded {title}\n"));
    }
    for (path, err) in &report.failed {
        out.push_str(&format!("Error uploading {}: {err}\n", path.display()));
    }
    out.push_str(&format!(
        "{} uploaded, {} already present, {} failed",
        report.published.len(),
        report.skipped.len(),
        report.failed.len()
    ));
    out
}

/// Map an error to a message with a hint matching its category.
pub fn format_error(action: &str, err: &DustError) -> String {
    let mut message = format!("Error {action}: {err}");
    match err.category() {
        ErrorCategory::Authentication => {
            message.push_str("\nCheck DUST_TOKEN and the workspace id (WLD).");
        }
        ErrorCategory::Configuration => {
            message.push_str("\nCheck your environment or .env file.");
        }
        ErrorCategory::Timeout => {
            message.push_str("\nThe server did not answer in time; DUST_TIMEOUT_SECS raises the limit.");
        }
        _ => {}
    }
    message
}

pub fn report_error(action: &str, err: &DustError) {
    eprintln!("{}", format_error(action, err));
}
