//! HTTP client for the team store

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;

use super::error::ClientError;
use crate::api::teams::CreatedTeamResponse;
use crate::api::types::ApiErrorResponse;
use crate::domain::team::{Team, TeamFields, TeamId};

/// Default address of a locally running store
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Operations the client form needs from the store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeamsClient: Send + Sync {
    async fn list(&self) -> Result<Vec<Team>, ClientError>;
    async fn create(&self, fields: &TeamFields) -> Result<TeamId, ClientError>;
    async fn update(&self, id: TeamId, fields: &TeamFields) -> Result<Team, ClientError>;
    async fn delete(&self, id: TeamId) -> Result<(), ClientError>;
}

/// reqwest-backed client; one request at a time, no retries
#[derive(Debug, Clone)]
pub struct HttpTeamsClient {
    client: Client,
    base_url: String,
}

impl HttpTeamsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn teams_url(&self) -> String {
        format!("{}/teams", self.base_url)
    }

    fn team_url(&self, id: TeamId) -> String {
        format!("{}/teams/{}", self.base_url, id)
    }
}

impl Default for HttpTeamsClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// Pass successes through; turn anything else into a rejection with the server's message
async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
        Ok(parsed) => parsed.error.message,
        Err(_) if !body.trim().is_empty() => body,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
    };

    Err(ClientError::rejected(status.as_u16(), message))
}

#[async_trait]
impl TeamsClient for HttpTeamsClient {
    async fn list(&self) -> Result<Vec<Team>, ClientError> {
        debug!(url = %self.teams_url(), "Fetching teams");

        let response = self.client.get(self.teams_url()).send().await?;
        let teams = check_status(response).await?.json::<Vec<Team>>().await?;

        Ok(teams)
    }

    async fn create(&self, fields: &TeamFields) -> Result<TeamId, ClientError> {
        let response = self
            .client
            .post(self.teams_url())
            .json(fields)
            .send()
            .await?;
        let created = check_status(response)
            .await?
            .json::<CreatedTeamResponse>()
            .await?;

        Ok(created.id)
    }

    async fn update(&self, id: TeamId, fields: &TeamFields) -> Result<Team, ClientError> {
        let response = self
            .client
            .put(self.team_url(id))
            .json(fields)
            .send()
            .await?;
        let team = check_status(response).await?.json::<Team>().await?;

        Ok(team)
    }

    async fn delete(&self, id: TeamId) -> Result<(), ClientError> {
        let response = self.client.delete(self.team_url(id)).send().await?;
        check_status(response).await?;

        Ok(())
    }
}
