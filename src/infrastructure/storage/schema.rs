//! Idempotent schema bootstrap, run once at startup

use sqlx::SqlitePool;
use tracing::info;

use crate::domain::DomainError;

const CREATE_TEAMS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS teams (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        coach TEXT,
        city TEXT
    )
"#;

/// Create the `teams` table if it does not exist yet
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), DomainError> {
    sqlx::query(CREATE_TEAMS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create teams table: {}", e)))?;

    info!("Schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::{connect, SqliteConfig};

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let pool = connect(&SqliteConfig::in_memory()).await.unwrap();

        ensure_schema(&pool).await.unwrap();
        sqlx::query("INSERT INTO teams (name) VALUES ('Lions')")
            .execute(&pool)
            .await
            .unwrap();
        ensure_schema(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teams")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
