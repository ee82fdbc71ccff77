//! Team Manager
//!
//! A record store for teams (id, name, coach, city) with:
//! - An HTTP API for listing, creating, updating and deleting teams
//! - SQLite persistence with an idempotent schema bootstrap
//! - An interactive terminal form that drives the API

pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::storage::{self, SqliteConfig};
use infrastructure::team::{SqliteTeamRepository, TeamService};
use tracing::info;

/// Create the application state from loaded configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    create_app_state(&SqliteConfig::from(&config.database)).await
}

/// Open the store, bootstrap the schema and wire the team service
pub async fn create_app_state(sqlite: &SqliteConfig) -> anyhow::Result<AppState> {
    let pool = storage::connect(sqlite).await?;
    storage::ensure_schema(&pool).await?;

    let repository = Arc::new(SqliteTeamRepository::new(pool.clone()));
    let team_service = Arc::new(TeamService::new(repository));

    let existing = team_service.count().await?;
    info!(teams = existing, "Team store ready");

    Ok(AppState::new(team_service, pool))
}
