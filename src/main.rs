//! Application entry point for the Nimmo English-practice companion.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Parse the command line.
//! 3. Load [`AppConfig`] from disk (returns default on first run).
//! 4. Run the selected subcommand:
//!    * `serve`: HTTP API for the browser front-end (default).
//!    * `chat`: interactive terminal chat.
//!    * `check`: print canned corrections for a sentence.
//!    * `prompt`: print the system prompt for a mode.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use nimmo::{
    app::run_chat,
    chat::{ChatService, ChatSession},
    config::{AppConfig, API_KEY_ENV},
    llm::{ContextManager, FallbackGenerator, GeminiGenerator, ReplyGenerator},
    server,
    tutor::{build_prompt, scan_for_corrections, Mode},
};

#[derive(Parser)]
#[command(name = "nimmo", version, about = "English-practice chat companion")]
struct Cli {
    /// Path to settings.toml (defaults to the platform config directory).
    #[arg(long, global = true, env = "NIMMO_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the chat API.
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Chat with Nimmo in the terminal.
    Chat {
        /// conversation, vocabulary or writing.
        #[arg(long)]
        mode: Option<String>,
    },
    /// Check a sentence for common mistakes.
    Check {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Print the system prompt for a mode.
    Prompt {
        #[arg(long)]
        mode: Option<String>,
    },
}

fn load_config(path: Option<&PathBuf>) -> AppConfig {
    let loaded = match path {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e:#}); using defaults");
        AppConfig::default()
    })
}

fn gemini(config: &AppConfig) -> GeminiGenerator {
    let generator = GeminiGenerator::from_config(&config.llm);
    if !generator.has_api_key() {
        log::warn!("No API key configured; set llm.api_key or {API_KEY_ENV}");
    }
    generator
}

fn chat_service(config: &AppConfig, generator: Arc<dyn ReplyGenerator>) -> ChatService {
    ChatService::new(
        generator,
        ContextManager::with_capacity(config.chat.history_window),
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 2-3. Command line and configuration
    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_ref());

    // 4. Subcommand
    match cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    }) {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            log::info!("Nimmo starting up (model {})", config.llm.model);
            let service = chat_service(&config, Arc::new(gemini(&config)));
            server::serve(&config.server, service).await?;
        }

        Command::Chat { mode } => {
            let mode = match mode {
                Some(name) => Mode::from_name(Some(name.as_str())),
                None => config.chat.default_mode,
            };
            let generator = FallbackGenerator::new(gemini(&config));
            let mut session = ChatSession::new(chat_service(&config, Arc::new(generator)), mode);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            run_chat(&mut session, stdin, tokio::io::stdout()).await?;
        }

        Command::Check { text } => {
            let notices = scan_for_corrections(&text.join(" "));
            if notices.is_empty() {
                println!("No corrections.");
            }
            for notice in notices {
                println!("{notice}");
            }
        }

        Command::Prompt { mode } => {
            println!("{}", build_prompt(Mode::from_name(mode.as_deref())));
        }
    }

    Ok(())
}
