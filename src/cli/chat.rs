//! Handler for the interactive `chat` command.

use dialoguer::{theme::ColorfulTheme, Input};
use owo_colors::OwoColorize;
use tracing::info;

use crate::app::Assistant;
use crate::cli::banner;
use crate::config::Config;
use crate::domain::transcript::{Role, Transcript, Utterance};
use crate::error::Result;

/// Run the interactive chat loop until `exit`/`quit` or end of input.
pub async fn execute(config: Config, no_banner: bool) -> Result<()> {
    if !no_banner {
        banner::print_banner();
    }

    let assistant = Assistant::from_config(&config)?;
    info!(model = %config.model.repo_id, "chat session started");

    // The conversation log lives here, with the caller; the assistant
    // stays stateless between turns.
    let mut transcript = Transcript::new();

    loop {
        let line: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("you")
            .allow_empty(true)
            .interact_text()?;

        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if matches!(question, "exit" | "quit") {
            break;
        }

        transcript.push(Role::User, question);
        let reply = assistant.answer(question).await;
        transcript.push(Role::Assistant, reply);

        if let Some(entry) = transcript.last() {
            render(entry);
        }
    }

    info!(turns = transcript.len() / 2, "chat session ended");
    Ok(())
}

/// Print one conversation entry with role coloring.
fn render(entry: &Utterance) {
    let label = match entry.role {
        Role::User => "you".cyan().bold().to_string(),
        Role::Assistant => "banter".blue().bold().to_string(),
    };
    println!("{label}: {}", entry.content);
    println!();
}
