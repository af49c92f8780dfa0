//! Launcher plugin entry point.
//!
//! # Responsibility
//! - Read process-level settings (database file, logging).
//! - Serve one Flow Launcher JSON-RPC request or one terminal subcommand.
//! - Keep stdout reserved for the JSON response.

mod host;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use host::{parse_request, Host, HostRequest, RpcResponse};
use log::info;
use snippets_core::config::DEFAULT_DB_FILE_NAME;
use snippets_core::{
    default_log_level, error_chain, init_logging, ActionDescriptor, SnippetContext, SnippetsConfig,
    SqliteSnippetRepository, SystemClipboard,
};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Key/value snippet store for launchers", long_about = None)]
struct Args {
    /// SQLite file holding the snippets
    #[arg(long, env = "SNIPPETS_DB", default_value = DEFAULT_DB_FILE_NAME, global = true)]
    db: PathBuf,

    /// Directory for rolling log files (defaults to ./logs)
    #[arg(long, env = "SNIPPETS_LOG_DIR", global = true)]
    log_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, env = "SNIPPETS_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    /// JSON-RPC request, as passed by the launcher
    request: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a query and print the result list
    Query {
        /// Query text; words are joined with single spaces
        text: Vec<String>,
    },
    /// Print the context actions for a stored snippet
    Context { key: String, value: String },
    /// Save a snippet and copy its value
    Save { key: String, value: String },
    /// Copy a value to the clipboard
    Copy { value: String },
    /// Delete a snippet
    Delete { key: String },
}

impl Command {
    fn into_request(self) -> HostRequest {
        match self {
            Self::Query { text } => HostRequest::Query(text.join(" ")),
            Self::Context { key, value } => {
                HostRequest::ContextMenu(SnippetContext::new(key, value))
            }
            Self::Save { key, value } => {
                HostRequest::Execute(ActionDescriptor::Save { key, value })
            }
            Self::Copy { value } => HostRequest::Execute(ActionDescriptor::Copy { value }),
            Self::Delete { key } => HostRequest::Execute(ActionDescriptor::Delete { key }),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    start_logging(&args);

    let request = match (args.command, args.request) {
        (Some(command), _) => command.into_request(),
        (None, Some(raw)) => parse_request(&raw).context("failed to decode launcher request")?,
        (None, None) => HostRequest::Query(String::new()),
    };

    let config = SnippetsConfig::with_db_path(args.db).normalized();
    let repo = SqliteSnippetRepository::new(config.db_path.clone());
    let clipboard = SystemClipboard::new();
    let host = Host::new(&repo, &clipboard, &config);

    let response = host
        .handle(request)
        .with_context(|| format!("snippet action failed for `{}`", config.db_path.display()))?;
    if let Some(response) = response {
        write_response(&response)?;
    }
    Ok(())
}

fn write_response(response: &RpcResponse) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer(&mut stdout, response).context("failed to encode response")?;
    writeln!(stdout).context("failed to write response")?;
    Ok(())
}

// Logging problems are reported on stderr and never stop the request.
fn start_logging(args: &Args) {
    let level = args.log_level.as_deref().unwrap_or(default_log_level());
    let requested = args.log_dir.clone().unwrap_or_else(|| PathBuf::from("logs"));
    let log_dir = if requested.is_absolute() {
        requested
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(requested),
            Err(err) => {
                eprintln!("snippets: logging disabled: {err}");
                return;
            }
        }
    };

    match init_logging(level, &log_dir) {
        Ok(()) => info!(
            "event=cli_start module=cli status=ok core_version={}",
            snippets_core::core_version()
        ),
        Err(err) => eprintln!("snippets: logging disabled: {}", error_chain(&err)),
    }
}
