//! Team service for team management

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::team::{Team, TeamFields, TeamId, TeamRepository};
use crate::domain::DomainError;

/// Team service: validates input and delegates to the repository
#[derive(Debug)]
pub struct TeamService<R: TeamRepository> {
    repository: Arc<R>,
}

impl<R: TeamRepository> TeamService<R> {
    /// Create a new team service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List all teams
    pub async fn list(&self) -> Result<Vec<Team>, DomainError> {
        debug!("Listing teams");
        self.repository.list().await
    }

    /// Get a team by ID
    pub async fn get(&self, id: &str) -> Result<Team, DomainError> {
        let team_id = parse_id(id)?;

        self.repository
            .get(team_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Team '{}' not found", team_id)))
    }

    /// Create a new team and return its ID
    pub async fn create(&self, fields: TeamFields) -> Result<TeamId, DomainError> {
        let name = fields
            .validate()
            .map_err(|e| DomainError::validation(e.to_string()))?;
        info!(name = %name, "Creating team");

        let id = self.repository.create(&fields).await?;
        info!(id = %id, "Team created");

        Ok(id)
    }

    /// Replace all fields of a team
    pub async fn update(&self, id: &str, fields: TeamFields) -> Result<Team, DomainError> {
        let team_id = parse_id(id)?;
        fields
            .validate()
            .map_err(|e| DomainError::validation(e.to_string()))?;
        info!(id = %team_id, "Updating team");

        self.repository.update(team_id, &fields).await
    }

    /// Delete a team and return the ID it had
    pub async fn delete(&self, id: &str) -> Result<TeamId, DomainError> {
        let team_id = parse_id(id)?;
        info!(id = %team_id, "Deleting team");

        self.repository.delete(team_id).await?;
        Ok(team_id)
    }

    /// Count teams
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}

fn parse_id(id: &str) -> Result<TeamId, DomainError> {
    id.parse::<TeamId>()
        .map_err(|e| DomainError::invalid_id(e.to_string()))
}
