//! Application state for shared services

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::domain::team::{Team, TeamFields, TeamId, TeamRepository};
use crate::domain::DomainError;
use crate::infrastructure::team::TeamService;

/// Application state: the team service plus the store handle it runs on
#[derive(Clone)]
pub struct AppState {
    pub team_service: Arc<dyn TeamServiceTrait>,
    pub pool: SqlitePool,
}

/// Trait for team service operations
#[async_trait::async_trait]
pub trait TeamServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Team>, DomainError>;
    async fn get(&self, id: &str) -> Result<Team, DomainError>;
    async fn create(&self, fields: TeamFields) -> Result<TeamId, DomainError>;
    async fn update(&self, id: &str, fields: TeamFields) -> Result<Team, DomainError>;
    async fn delete(&self, id: &str) -> Result<TeamId, DomainError>;
}

#[async_trait::async_trait]
impl<R: TeamRepository + 'static> TeamServiceTrait for TeamService<R> {
    async fn list(&self) -> Result<Vec<Team>, DomainError> {
        TeamService::list(self).await
    }

    async fn get(&self, id: &str) -> Result<Team, DomainError> {
        TeamService::get(self, id).await
    }

    async fn create(&self, fields: TeamFields) -> Result<TeamId, DomainError> {
        TeamService::create(self, fields).await
    }

    async fn update(&self, id: &str, fields: TeamFields) -> Result<Team, DomainError> {
        TeamService::update(self, id, fields).await
    }

    async fn delete(&self, id: &str) -> Result<TeamId, DomainError> {
        TeamService::delete(self, id).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(team_service: Arc<dyn TeamServiceTrait>, pool: SqlitePool) -> Self {
        Self { team_service, pool }
    }
}
