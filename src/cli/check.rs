//! Handler for the `check` diagnostic commands.

use std::path::Path;

use owo_colors::OwoColorize;

use crate::config::{Config, TOKEN_ENV};
use crate::error::Result;

/// Validate the configuration file at `path`.
///
/// Unlike `chat` and `ask`, a missing file is an error here: the point of
/// the check is to inspect what the file actually says.
pub fn config(path: &Path) -> Result<()> {
    let config = Config::load(path)?;

    println!(
        "{} configuration valid: model {} at {}",
        "ok".green().bold(),
        config.model.repo_id,
        config.model.api_url
    );

    if std::env::var(TOKEN_ENV).is_ok() {
        println!("{} {TOKEN_ENV} is set", "ok".green().bold());
    } else {
        println!(
            "{} {TOKEN_ENV} is not set; only arithmetic questions will be answered",
            "warning".yellow().bold()
        );
    }

    Ok(())
}
