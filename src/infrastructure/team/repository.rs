//! SQLite-backed team repository implementation

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::team::{Team, TeamFields, TeamId, TeamRepository};
use crate::domain::DomainError;

/// SQLite-backed implementation of TeamRepository
///
/// Every operation is a single statement, so concurrent writers to the same
/// row resolve as last-write-wins.
#[derive(Debug, Clone)]
pub struct SqliteTeamRepository {
    pool: SqlitePool,
}

impl SqliteTeamRepository {
    /// Create a new repository over an open pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TeamRepository for SqliteTeamRepository {
    async fn list(&self) -> Result<Vec<Team>, DomainError> {
        sqlx::query_as::<_, Team>("SELECT id, name, coach, city FROM teams ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list teams: {}", e)))
    }

    async fn get(&self, id: TeamId) -> Result<Option<Team>, DomainError> {
        sqlx::query_as::<_, Team>("SELECT id, name, coach, city FROM teams WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get team: {}", e)))
    }

    async fn create(&self, fields: &TeamFields) -> Result<TeamId, DomainError> {
        let result = sqlx::query("INSERT INTO teams (name, coach, city) VALUES (?, ?, ?)")
            .bind(&fields.name)
            .bind(&fields.coach)
            .bind(&fields.city)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create team: {}", e)))?;

        Ok(TeamId::new(result.last_insert_rowid()))
    }

    async fn update(&self, id: TeamId, fields: &TeamFields) -> Result<Team, DomainError> {
        sqlx::query_as::<_, Team>(
            r#"
            UPDATE teams
            SET name = ?, coach = ?, city = ?
            WHERE id = ?
            RETURNING id, name, coach, city
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.coach)
        .bind(&fields.city)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update team: {}", e)))?
        .ok_or_else(|| DomainError::not_found(format!("Team '{}' not found", id)))
    }

    async fn delete(&self, id: TeamId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM teams WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete team: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!("Team '{}' not found", id)));
        }

        Ok(())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teams")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count teams: {}", e)))?;

        Ok(count as usize)
    }
}
