//! dust CLI binary entry point.

use std::sync::Arc;

use clap::Parser;
use dust_cli::cli::output::{
    format_agent_details, format_agents, format_error, format_outcome, format_publish_report,
};
use dust_cli::cli::{AskArgs, Cli, Commands, PublishArgs};
use dust_cli::client::DustClient;
use dust_cli::config::DustConfig;
use dust_cli::documents::discover_documents;
use dust_cli::session::ConversationSession;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match DustConfig::from_env().and_then(DustClient::new) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("{}", format_error("loading configuration", &e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        None | Some(Commands::Chat) => dust_cli::cli::repl::run(client).await,
        Some(Commands::Agents) => handle_agents(&client).await,
        Some(Commands::Agent(args)) => handle_agent(&client, &args.agent_id).await,
        Some(Commands::Ask(args)) => handle_ask(client, args).await,
        Some(Commands::Publish(args)) => handle_publish(&client, args).await,
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn handle_agents(client: &DustClient) -> Result<(), Box<dyn std::error::Error>> {
    let agents = client
        .agents()
        .list_agents()
        .await
        .map_err(|e| format_error("fetching agents", &e))?;
    println!("{}", format_agents(&agents));
    Ok(())
}

async fn handle_agent(client: &DustClient, agent_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let details = client
        .agents()
        .get_agent(agent_id)
        .await
        .map_err(|e| format_error(&format!("fetching details for agent {agent_id}"), &e))?;
    println!("{}", format_agent_details(agent_id, &details));
    Ok(())
}

async fn handle_ask(client: Arc<DustClient>, args: AskArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = ConversationSession::new(client.clone(), client.config().message_context());

    if let Some(path) = &args.attach {
        if session.upload_and_attach(path).await.is_none() {
            eprintln!("Upload of {} failed; continuing without attachment", path.display());
        }
    }

    let outcome = session
        .prompt(Some(args.agent_id.as_str()), &args.prompt_text())
        .await
        .map_err(|e| format_error(&format!("asking agent {}", args.agent_id), &e))?;
    println!("{}", format_outcome(&outcome));
    Ok(())
}

async fn handle_publish(client: &DustClient, args: PublishArgs) -> Result<(), Box<dyn std::error::Error>> {
    let paths = discover_documents(&args.dir, &args.extension)
        .map_err(|e| format_error("scanning documents", &e))?;
    if paths.is_empty() {
        println!("No .{} files found under {}", args.extension, args.dir.display());
        return Ok(());
    }

    let report = client
        .documents()
        .publish_all(&paths)
        .await
        .map_err(|e| format_error("listing existing documents", &e))?;
    println!("{}", format_publish_report(&report));
    Ok(())
}
