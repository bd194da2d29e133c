//! Command-line interface definitions.

pub mod ask;
pub mod banner;
pub mod chat;
pub mod check;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Banter - terminal chat over Hugging Face hosted inference.
#[derive(Parser, Debug)]
#[command(name = "banter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "banter.toml", global = true)]
    pub config: PathBuf,

    /// Override the log level from config
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Defaults to `chat` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive chat session
    Chat(ChatArgs),

    /// Ask a single question and print the reply
    Ask(AskArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `banter check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config,
}

/// Arguments for the `chat` subcommand.
#[derive(Parser, Debug, Default)]
pub struct ChatArgs {
    /// Disable the startup banner
    #[arg(long)]
    pub no_banner: bool,
}

/// Arguments for the `ask` subcommand.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question text (joined with spaces when given as several words)
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,
}

impl AskArgs {
    pub fn question(&self) -> String {
        self.question.join(" ")
    }
}
