//! flychat CLI: terminal chat widget and reference backend

use clap::{Args, Parser, Subcommand};
use flychat_engine::{ChatBackend, ClientConfig, Conversation, HttpChatClient};
use flychat_server::ServerConfig;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Minimal chat widget posting to a local chat endpoint
#[derive(Parser)]
#[command(name = "flychat")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    // TUI options, accepted without the `tui` subcommand
    #[command(flatten)]
    tui: TuiArgs,
}

impl Cli {
    /// The command to run; a bare invocation opens the TUI.
    fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Tui(self.tui))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Open the chat TUI (default when no command specified)
    Tui(TuiArgs),

    /// Send one message and print the reply
    Send {
        /// Message text
        message: String,

        #[command(flatten)]
        client: ClientArgs,

        /// Print the exchange as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the reference chat backend
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:5000")]
        bind: String,

        /// Company facts (JSON object)
        #[arg(long, default_value = "data/company.json")]
        company: PathBuf,

        /// Leads (JSON array of objects with a `name`)
        #[arg(long, default_value = "data/leads.json")]
        leads: PathBuf,
    },
}

#[derive(Args)]
struct TuiArgs {
    #[command(flatten)]
    client: ClientArgs,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Options shared by the client commands.
#[derive(Args)]
struct ClientArgs {
    /// Chat endpoint URL
    #[arg(long, env = "FLYCHAT_ENDPOINT")]
    endpoint: Option<String>,

    /// Client config file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ClientArgs {
    fn load(self) -> ClientConfig {
        match ClientConfig::load_or_default(self.config.as_deref()) {
            Ok(config) => config.with_endpoint(self.endpoint),
            Err(e) => {
                eprintln!("Failed to load config: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    match cli.into_command() {
        Commands::Tui(args) => rt.block_on(cmd_tui(args)),
        Commands::Send {
            message,
            client,
            json,
        } => rt.block_on(cmd_send(message, client, json)),
        Commands::Serve {
            bind,
            company,
            leads,
        } => rt.block_on(cmd_serve(ServerConfig {
            bind_addr: bind,
            company_path: company,
            leads_path: leads,
        })),
    }
}

/// Default log filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info,flychat_engine=debug,flychat_server=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter())
        .init();
}

fn init_file_logging(path: &Path) {
    match std::fs::File::create(path) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_env_filter(env_filter())
                .init();
        }
        Err(e) => {
            eprintln!("Failed to open log file {}: {e}", path.display());
            std::process::exit(1);
        }
    }
}

async fn cmd_tui(args: TuiArgs) {
    if let Some(path) = &args.log_file {
        init_file_logging(path);
    }

    let config = args.client.load();
    tracing::info!(endpoint = %config.endpoint, "starting chat TUI");
    let backend: Arc<dyn ChatBackend> = Arc::new(HttpChatClient::new(config.endpoint.clone()));

    if let Err(e) = flychat_tui::run_tui(&config, backend).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn cmd_send(message: String, client: ClientArgs, json: bool) {
    init_stderr_logging();

    let config = client.load();
    let backend = HttpChatClient::new(config.endpoint);
    tracing::debug!(endpoint = backend.endpoint(), "sending one message");
    let mut conversation = Conversation::new();
    conversation.update_draft(message);

    match conversation.send(&backend).await {
        Ok(Some(pair)) => {
            if !json {
                println!("{}", pair.bot);
                return;
            }
            match serde_json::to_string_pretty(pair) {
                Ok(text) => println!("{text}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
        Ok(None) => {
            eprintln!("Nothing to send: message is empty");
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

async fn cmd_serve(config: ServerConfig) {
    init_stderr_logging();

    if let Err(e) = flychat_server::serve(&config).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    fn tui_endpoint(args: &[&str]) -> Option<String> {
        match Cli::try_parse_from(args).unwrap().into_command() {
            Commands::Tui(tui) => tui.client.endpoint,
            _ => panic!("expected tui command"),
        }
    }

    #[test]
    fn test_no_subcommand_opens_tui() {
        let cli = Cli::try_parse_from(["flychat", "--log-file", "chat.log"]).unwrap();
        match cli.into_command() {
            Commands::Tui(tui) => assert_eq!(tui.log_file, Some(PathBuf::from("chat.log"))),
            _ => panic!("expected tui command"),
        }
    }

    #[test]
    fn test_endpoint_flag_without_subcommand() {
        assert_eq!(
            tui_endpoint(&["flychat", "--endpoint", "http://127.0.0.1:9000/chat"]).as_deref(),
            Some("http://127.0.0.1:9000/chat")
        );
    }

    #[test]
    fn test_endpoint_env_applies_to_bare_invocation() {
        std::env::set_var("FLYCHAT_ENDPOINT", "http://10.0.0.9:7000/chat");
        let bare = tui_endpoint(&["flychat"]);
        let tui = tui_endpoint(&["flychat", "tui"]);
        std::env::remove_var("FLYCHAT_ENDPOINT");

        assert_eq!(bare.as_deref(), Some("http://10.0.0.9:7000/chat"));
        assert_eq!(bare, tui);
    }

    #[test]
    fn test_top_level_args_conflict_with_subcommand() {
        assert!(Cli::try_parse_from(["flychat", "--log-file", "x.log", "serve"]).is_err());
    }

    #[test]
    fn test_send_args() {
        let cli = Cli::try_parse_from([
            "flychat",
            "send",
            "hello there",
            "--endpoint",
            "http://127.0.0.1:9000/chat",
            "--json",
        ])
        .unwrap();

        match cli.into_command() {
            Commands::Send {
                message,
                client,
                json,
            } => {
                assert_eq!(message, "hello there");
                assert_eq!(client.endpoint.as_deref(), Some("http://127.0.0.1:9000/chat"));
                assert!(json);
            }
            _ => panic!("expected send command"),
        }
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["flychat", "serve"]).unwrap();
        match cli.into_command() {
            Commands::Serve {
                bind,
                company,
                leads,
            } => {
                assert_eq!(bind, "127.0.0.1:5000");
                assert_eq!(company, PathBuf::from("data/company.json"));
                assert_eq!(leads, PathBuf::from("data/leads.json"));
            }
            _ => panic!("expected serve command"),
        }
    }
}
