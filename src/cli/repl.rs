//! Interactive read-eval-print loop.

use std::sync::Arc;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::client::DustClient;
use crate::session::ConversationSession;

use super::command::{ReplCommand, HELP};
use super::output::{format_agent_details, format_agents, format_outcome, format_upload, report_error};

const PROMPT: &str = "dust-cli> ";

/// Run the chat loop until `\exit`, Ctrl-C or Ctrl-D.
pub async fn run(client: Arc<DustClient>) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = ConversationSession::new(client.clone(), client.config().message_context());
    let mut editor = DefaultEditor::new()?;

    println!("Type \\help for commands.");
    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("\nExiting...");
                break;
            }
            Err(e) => return Err(e.into()),
        };
        if !line.trim().is_empty() {
            let _ = editor.add_history_entry(line.as_str());
        }

        match ReplCommand::parse(&line) {
            ReplCommand::Empty => continue,
            ReplCommand::Exit => break,
            ReplCommand::Help => println!("{HELP}"),
            ReplCommand::Usage(usage) => println!("Usage: {usage}"),
            ReplCommand::Unknown(input) => println!("Unknown command: {input}"),
            ReplCommand::ListAgents => match client.agents().list_agents().await {
                Ok(agents) => println!("{}", format_agents(&agents)),
                Err(e) => report_error("fetching agents", &e),
            },
            ReplCommand::ShowAgent(agent_id) => match client.agents().get_agent(&agent_id).await {
                Ok(details) => println!("{}", format_agent_details(&agent_id, &details)),
                Err(e) => report_error(&format!("fetching details for agent {agent_id}"), &e),
            },
            ReplCommand::Upload(path) => {
                let file_id = session.upload_and_attach(&path).await.map(str::to_owned);
                println!("{}", format_upload(&path, file_id.as_deref(), session.state()));
            }
            ReplCommand::Prompt { agent, text } => {
                match session.prompt(agent.as_deref(), &text).await {
                    Ok(outcome) => println!("{}", format_outcome(&outcome)),
                    Err(e) => {
                        let action = match agent.as_deref().or(session.active_agent()) {
                            Some(target) => format!("asking agent {target}"),
                            None => "sending prompt".to_string(),
                        };
                        report_error(&action, &e);
                    }
                }
            }
        }
    }

    Ok(())
}
