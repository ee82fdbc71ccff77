//! Team repository trait

use async_trait::async_trait;

use super::entity::{Team, TeamFields, TeamId};
use crate::domain::DomainError;

/// Repository for managing teams
///
/// Implementations assume the fields were validated by the caller.
#[async_trait]
pub trait TeamRepository: Send + Sync + std::fmt::Debug {
    /// List all teams in insertion order
    async fn list(&self) -> Result<Vec<Team>, DomainError>;

    /// Get a team by ID
    async fn get(&self, id: TeamId) -> Result<Option<Team>, DomainError>;

    /// Insert a new team and return its store-assigned ID
    async fn create(&self, fields: &TeamFields) -> Result<TeamId, DomainError>;

    /// Replace all fields of an existing team, `NotFound` if absent
    async fn update(&self, id: TeamId, fields: &TeamFields) -> Result<Team, DomainError>;

    /// Delete a team by ID, `NotFound` if absent
    async fn delete(&self, id: TeamId) -> Result<(), DomainError>;

    /// Count stored teams
    async fn count(&self) -> Result<usize, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::RwLock;

    /// Mock implementation for testing
    #[derive(Debug, Default)]
    pub struct MockTeamRepository {
        teams: RwLock<BTreeMap<TeamId, Team>>,
        last_id: RwLock<i64>,
    }

    impl MockTeamRepository {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl TeamRepository for MockTeamRepository {
        async fn list(&self) -> Result<Vec<Team>, DomainError> {
            let teams = self.teams.read().unwrap();
            Ok(teams.values().cloned().collect())
        }

        async fn get(&self, id: TeamId) -> Result<Option<Team>, DomainError> {
            let teams = self.teams.read().unwrap();
            Ok(teams.get(&id).cloned())
        }

        async fn create(&self, fields: &TeamFields) -> Result<TeamId, DomainError> {
            let mut last_id = self.last_id.write().unwrap();
            *last_id += 1;
            let id = TeamId::new(*last_id);

            let team = Team::new(id, fields.clone())
                .map_err(|e| DomainError::validation(e.to_string()))?;
            self.teams.write().unwrap().insert(id, team);
            Ok(id)
        }

        async fn update(&self, id: TeamId, fields: &TeamFields) -> Result<Team, DomainError> {
            let mut teams = self.teams.write().unwrap();

            if !teams.contains_key(&id) {
                return Err(DomainError::not_found(format!("Team '{}' not found", id)));
            }

            let team = Team::new(id, fields.clone())
                .map_err(|e| DomainError::validation(e.to_string()))?;
            teams.insert(id, team.clone());
            Ok(team)
        }

        async fn delete(&self, id: TeamId) -> Result<(), DomainError> {
            let mut teams = self.teams.write().unwrap();

            match teams.remove(&id) {
                Some(_) => Ok(()),
                None => Err(DomainError::not_found(format!("Team '{}' not found", id))),
            }
        }

        async fn count(&self) -> Result<usize, DomainError> {
            Ok(self.teams.read().unwrap().len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockTeamRepository;
    use super::*;

    #[tokio::test]
    async fn test_mock_create_and_get() {
        let repo = MockTeamRepository::new();

        let id = repo.create(&TeamFields::new("Lions")).await.unwrap();
        assert_eq!(id, TeamId::new(1));

        let fetched = repo.get(id).await.unwrap().unwrap();
        assert_eq!(fetched.name(), "Lions");
    }

    #[tokio::test]
    async fn test_mock_ids_are_not_reused() {
        let repo = MockTeamRepository::new();

        let first = repo.create(&TeamFields::new("A")).await.unwrap();
        repo.delete(first).await.unwrap();
        let second = repo.create(&TeamFields::new("B")).await.unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn test_mock_delete_missing() {
        let repo = MockTeamRepository::new();
        let result = repo.delete(TeamId::new(9)).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
