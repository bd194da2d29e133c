//! Handler for the one-shot `ask` command.

use crate::app::Assistant;
use crate::config::Config;
use crate::error::Result;

/// Answer a single question and print the reply to stdout.
pub async fn execute(config: Config, question: &str) -> Result<()> {
    let assistant = Assistant::from_config(&config)?;
    let reply = assistant.answer(question).await;
    println!("{reply}");
    Ok(())
}
