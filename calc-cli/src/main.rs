//! calc CLI: serve the /ask endpoint, answer once, or run a console / chat session. Config from env and optional CLI args.

use anyhow::{Context, Result};
use calc_api::{AppState, AskClient, ChatSession};
use calc_cli::{load_config, run_chat, run_console, Cli, Commands};
use calc_core::init_tracing;
use clap::Parser;
use handler_chain::IntentChain;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    // Handlers are registered once here and shared for the life of the process.
    let chain = IntentChain::with_default_handlers();

    match cli.command {
        Commands::Serve { bind } => {
            let config = load_config(bind, None)?;
            init_tracing(&config.log_file).context("Init tracing")?;
            info!(
                bind_addr = %config.bind_addr,
                handlers = ?chain.handlers(),
                "Starting calc API"
            );
            calc_api::run(&config, AppState::new(chain)).await
        }
        Commands::Ask { text } => {
            println!("{}", chain.respond(&text));
            Ok(())
        }
        Commands::Console => {
            let stdin = std::io::stdin();
            run_console(&chain, stdin.lock(), std::io::stdout())?;
            Ok(())
        }
        Commands::Chat { url } => {
            let config = load_config(None, url)?;
            let mut session = ChatSession::new(AskClient::new(config.api_url));
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            run_chat(&mut session, stdin, std::io::stdout()).await
        }
    }
}
