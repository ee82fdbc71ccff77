//! Form command - interactive terminal form over a running store

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, info, warn};

use crate::client::{FormCommand, FormResponse, HttpTeamsClient, TeamForm, DEFAULT_API_URL};
use crate::config::AppConfig;
use crate::infrastructure::logging::init_form_logging;

const PROMPT: &str = "teams> ";
const DEFAULT_HISTORY_FILE: &str = ".team_manager_history";

/// Arguments for the form command
#[derive(Args, Clone, Debug)]
pub struct FormArgs {
    /// Base URL of the team store
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// File the command history is kept in between sessions
    #[arg(long, default_value = DEFAULT_HISTORY_FILE)]
    pub history_file: PathBuf,

    /// Do not read or write the history file
    #[arg(long)]
    pub no_history: bool,
}

impl FormArgs {
    fn history_path(&self) -> Option<&Path> {
        (!self.no_history).then_some(self.history_file.as_path())
    }
}

/// Run the form until `quit`, Ctrl+C or end of input
pub async fn run(args: FormArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_form_logging(&config.logging)?;

    let client = HttpTeamsClient::new(&args.api_url);
    info!(api_url = %client.base_url(), "Starting team form");

    let mut form = TeamForm::new(client);
    let history = args.history_path();
    let mut editor = open_editor(history)?;

    println!("Team Manager - type 'help' for commands");
    if let FormResponse::Output(lines) = form.handle(FormCommand::List).await {
        print_lines(&lines);
    }

    loop {
        let line = match tokio::task::block_in_place(|| editor.readline(PROMPT)) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        if line.trim().is_empty() {
            continue;
        }
        if let Err(e) = editor.add_history_entry(line.as_str()) {
            debug!(error = %e, "Failed to record history entry");
        }

        let command = match FormCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        match form.handle(command).await {
            FormResponse::Output(lines) => print_lines(&lines),
            FormResponse::Quit => break,
        }
    }

    if let Some(path) = history {
        if let Err(e) = editor.save_history(path) {
            warn!(path = %path.display(), error = %e, "Failed to save history");
        }
    }

    info!("Team form closed");
    Ok(())
}

/// Create the line editor, seeded from the history file when one exists
fn open_editor(history: Option<&Path>) -> anyhow::Result<DefaultEditor> {
    let mut editor = DefaultEditor::new()?;

    if let Some(path) = history.filter(|p| p.exists()) {
        editor
            .load_history(path)
            .with_context(|| format!("Failed to read history from {}", path.display()))?;
        debug!(path = %path.display(), "Loaded history");
    }

    Ok(editor)
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustyline::history::History;

    fn args(no_history: bool) -> FormArgs {
        FormArgs {
            api_url: DEFAULT_API_URL.to_string(),
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
            no_history,
        }
    }

    #[test]
    fn test_history_path() {
        assert_eq!(args(false).history_path(), Some(Path::new(DEFAULT_HISTORY_FILE)));
        assert_eq!(args(true).history_path(), None);
    }

    #[test]
    fn test_history_survives_sessions() {
        let path = std::env::temp_dir().join(format!("team-form-{}.history", uuid::Uuid::new_v4()));

        let mut first = open_editor(Some(&path)).unwrap();
        first.add_history_entry("name Lions").unwrap();
        first.add_history_entry("add").unwrap();
        first.save_history(&path).unwrap();

        let second = open_editor(Some(&path)).unwrap();
        assert_eq!(second.history().len(), 2);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_history_file_is_not_an_error() {
        let path = std::env::temp_dir().join(format!("team-form-{}.history", uuid::Uuid::new_v4()));

        let editor = open_editor(Some(&path)).unwrap();
        assert_eq!(editor.history().len(), 0);
    }
}
