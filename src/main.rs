use clap::Parser;

use banter::cli::{ask, chat, check, ChatArgs, CheckCommand, Cli, Commands};
use banter::config::Config;
use banter::error::Result;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let command = cli
        .command
        .unwrap_or(Commands::Chat(ChatArgs::default()));

    match command {
        // Loads strictly: the point of the check is to inspect what the
        // file actually says, so a missing file is an error here.
        Commands::Check(CheckCommand::Config) => check::config(&cli.config),

        Commands::Ask(args) => {
            let config = load_config(&cli.config, &cli.log_level, cli.json_logs)?;
            ask::execute(config, &args.question()).await
        }

        Commands::Chat(args) => {
            let config = load_config(&cli.config, &cli.log_level, cli.json_logs)?;
            chat::execute(config, args.no_banner).await
        }
    }
}

/// Load config (defaults when the file is absent), apply CLI overrides,
/// and initialize logging.
fn load_config(
    path: &std::path::Path,
    log_level: &Option<String>,
    json_logs: bool,
) -> Result<Config> {
    let mut config = Config::load_or_default(path)?;
    if let Some(level) = log_level {
        config.logging.level = level.clone();
    }
    if json_logs {
        config.logging.format = "json".to_string();
    }
    config.init_logging();
    Ok(config)
}
