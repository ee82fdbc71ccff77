//! Client form state
//!
//! Holds the three text inputs, the current selection and the last list
//! fetched from the store. Every action talks to the store through a
//! [`TeamsClient`] and reports back with a [`Notice`].

use tracing::{debug, warn};

use super::error::ClientError;
use super::http::TeamsClient;
use crate::domain::team::{Team, TeamFields, TeamId};

/// Message shown to the user after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Warning { title: String, message: String },
    Error { title: String, message: String },
}

impl Notice {
    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Warning {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Rejections become warnings with the server's message; anything else is an error
    fn from_client_error(error: &ClientError) -> Self {
        match error {
            ClientError::Rejected { message, .. } => Self::warning("Error", message.clone()),
            other => Self::error("Error", other.to_string()),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info(message) => write!(f, "{}", message),
            Self::Warning { title, message } => write!(f, "[warning] {}: {}", title, message),
            Self::Error { title, message } => write!(f, "[error] {}: {}", title, message),
        }
    }
}

/// A parsed line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    List,
    Select(usize),
    Name(String),
    Coach(String),
    City(String),
    Show,
    Add,
    Update,
    Delete,
    Clear,
    Help,
    Quit,
}

impl FormCommand {
    /// Parse a line; the text after a field command is kept verbatim
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line.trim_end(), ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "list" | "ls" => Ok(Self::List),
            "select" | "sel" => rest
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .map(Self::Select)
                .ok_or_else(|| "Usage: select <row number>".to_string()),
            "name" => Ok(Self::Name(rest.to_string())),
            "coach" => Ok(Self::Coach(rest.to_string())),
            "city" => Ok(Self::City(rest.to_string())),
            "show" => Ok(Self::Show),
            "add" => Ok(Self::Add),
            "update" => Ok(Self::Update),
            "delete" | "del" => Ok(Self::Delete),
            "clear" => Ok(Self::Clear),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            "" => Err("Type 'help' for a list of commands".to_string()),
            other => Err(format!("Unknown command '{}'. Type 'help' for a list of commands", other)),
        }
    }
}

pub const HELP: &str = "\
Commands:
  list              reload and show all teams
  select <n>        select row n and copy it into the inputs
  name <text>       set the name input
  coach <text>      set the coach input (empty clears it)
  city <text>       set the city input (empty clears it)
  show              show the current inputs and selection
  add               add a team from the inputs
  update            overwrite the selected team with the inputs
  delete            delete the selected team
  clear             clear the inputs
  help              show this help
  quit              leave the form";

/// Result of handling one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormResponse {
    /// Lines to print, in order
    Output(Vec<String>),
    /// The user asked to leave
    Quit,
}

/// Render a team as `name - coach (city)`, with `-` for absent values
pub fn render_team(team: &Team) -> String {
    format!(
        "{} - {} ({})",
        team.name(),
        team.coach().unwrap_or("-"),
        team.city().unwrap_or("-")
    )
}

/// Interactive form over a team store
pub struct TeamForm<C: TeamsClient> {
    client: C,
    name: String,
    coach: String,
    city: String,
    selected: Option<TeamId>,
    teams: Vec<Team>,
}

impl<C: TeamsClient> TeamForm<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            name: String::new(),
            coach: String::new(),
            city: String::new(),
            selected: None,
            teams: Vec::new(),
        }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn selected(&self) -> Option<TeamId> {
        self.selected
    }

    pub fn inputs(&self) -> (&str, &str, &str) {
        (&self.name, &self.coach, &self.city)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_coach(&mut self, coach: impl Into<String>) {
        self.coach = coach.into();
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    pub fn clear_inputs(&mut self) {
        self.name.clear();
        self.coach.clear();
        self.city.clear();
    }

    /// Numbered rows for the current list
    pub fn rows(&self) -> Vec<String> {
        if self.teams.is_empty() {
            return vec!["(no teams)".to_string()];
        }

        self.teams
            .iter()
            .enumerate()
            .map(|(i, team)| {
                let marker = if Some(team.id()) == self.selected { "*" } else { " " };
                format!("{}{:>3}. {}", marker, i + 1, render_team(team))
            })
            .collect()
    }

    /// Inputs as they would be sent; blank coach and city go out as null
    pub fn fields(&self) -> TeamFields {
        fn optional(value: &str) -> Option<String> {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }

        TeamFields {
            name: Some(self.name.trim().to_string()),
            coach: optional(&self.coach),
            city: optional(&self.city),
        }
    }

    /// Replace the list with the store's current contents
    pub async fn load_teams(&mut self) -> Result<(), Notice> {
        self.teams.clear();

        match self.client.list().await {
            Ok(teams) => {
                debug!(count = teams.len(), "Loaded teams");
                self.teams = teams;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to load teams");
                Err(Notice::error("Error", format!("Failed to load teams: {}", e)))
            }
        }
    }

    /// Select a 1-based row and copy its values into the inputs
    pub fn select(&mut self, row: usize) -> Result<&Team, Notice> {
        let team = row
            .checked_sub(1)
            .and_then(|index| self.teams.get(index))
            .ok_or_else(|| Notice::warning("Select Team", format!("There is no row {}", row)))?;

        self.selected = Some(team.id());
        self.name = team.name().to_string();
        self.coach = team.coach().unwrap_or_default().to_string();
        self.city = team.city().unwrap_or_default().to_string();

        Ok(team)
    }

    pub async fn add(&mut self) -> Notice {
        match self.client.create(&self.fields()).await {
            Ok(id) => {
                self.clear_inputs();
                self.after_change(format!("Team added with id {}", id)).await
            }
            Err(e) => Notice::from_client_error(&e),
        }
    }

    pub async fn update(&mut self) -> Notice {
        let Some(id) = self.selected else {
            return Notice::warning("Select Team", "Please select a team to update");
        };

        match self.client.update(id, &self.fields()).await {
            Ok(team) => {
                self.clear_inputs();
                self.after_change(format!("Team {} updated", team.id())).await
            }
            Err(e) => Notice::from_client_error(&e),
        }
    }

    pub async fn delete(&mut self) -> Notice {
        let Some(id) = self.selected else {
            return Notice::warning("Select Team", "Please select a team to delete");
        };

        match self.client.delete(id).await {
            Ok(()) => {
                self.selected = None;
                self.clear_inputs();
                self.after_change(format!("Team {} deleted", id)).await
            }
            Err(e) => Notice::from_client_error(&e),
        }
    }

    async fn after_change(&mut self, message: String) -> Notice {
        match self.load_teams().await {
            Ok(()) => Notice::Info(message),
            Err(notice) => notice,
        }
    }

    fn show(&self) -> Vec<String> {
        let selected = self
            .selected
            .map(|id| id.to_string())
            .unwrap_or_else(|| "none".to_string());

        vec![
            format!("name:     {}", self.name),
            format!("coach:    {}", self.coach),
            format!("city:     {}", self.city),
            format!("selected: {}", selected),
        ]
    }

    /// Run one command against the form
    pub async fn handle(&mut self, command: FormCommand) -> FormResponse {
        let lines = match command {
            FormCommand::Quit => return FormResponse::Quit,
            FormCommand::List => match self.load_teams().await {
                Ok(()) => self.rows(),
                Err(notice) => vec![notice.to_string()],
            },
            FormCommand::Select(row) => match self.select(row) {
                Ok(team) => vec![format!("Selected: {}", render_team(team))],
                Err(notice) => vec![notice.to_string()],
            },
            FormCommand::Name(value) => {
                self.set_name(value);
                Vec::new()
            }
            FormCommand::Coach(value) => {
                self.set_coach(value);
                Vec::new()
            }
            FormCommand::City(value) => {
                self.set_city(value);
                Vec::new()
            }
            FormCommand::Show => self.show(),
            FormCommand::Add => {
                let notice = self.add().await;
                self.with_rows(notice)
            }
            FormCommand::Update => {
                let notice = self.update().await;
                self.with_rows(notice)
            }
            FormCommand::Delete => {
                let notice = self.delete().await;
                self.with_rows(notice)
            }
            FormCommand::Clear => {
                self.clear_inputs();
                Vec::new()
            }
            FormCommand::Help => vec![HELP.to_string()],
        };

        FormResponse::Output(lines)
    }

    fn with_rows(&self, notice: Notice) -> Vec<String> {
        let reloaded = matches!(notice, Notice::Info(_));
        let mut lines = vec![notice.to_string()];
        if reloaded {
            lines.extend(self.rows());
        }
        lines
    }
}
