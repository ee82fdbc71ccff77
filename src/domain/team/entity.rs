//! Team entity and related types

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::{validate_team_id, validate_team_name, TeamValidationError};

/// Team identifier - surrogate key assigned by the store
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct TeamId(i64);

impl TeamId {
    /// Wrap a store-assigned identifier
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner integer value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl FromStr for TeamId {
    type Err = TeamValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_team_id(s).map(Self)
    }
}

impl From<TeamId> for i64 {
    fn from(id: TeamId) -> Self {
        id.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The mutable part of a team, written wholesale by create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamFields {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub coach: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

impl TeamFields {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            coach: None,
            city: None,
        }
    }

    pub fn with_coach(mut self, coach: impl Into<String>) -> Self {
        self.coach = Some(coach.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Check the fields and return the validated name
    pub fn validate(&self) -> Result<&str, TeamValidationError> {
        let name = self.name.as_deref().unwrap_or_default();
        validate_team_name(name)?;
        Ok(name)
    }
}

/// Team entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Team {
    id: TeamId,
    name: String,
    coach: Option<String>,
    city: Option<String>,
}

impl Team {
    /// Build a team from stored fields
    pub fn new(id: TeamId, fields: TeamFields) -> Result<Self, TeamValidationError> {
        let name = fields.validate()?.to_string();

        Ok(Self {
            id,
            name,
            coach: fields.coach,
            city: fields.city,
        })
    }

    // Getters

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coach(&self) -> Option<&str> {
        self.coach.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// The current fields, suitable for sending back as an update
    pub fn fields(&self) -> TeamFields {
        TeamFields {
            name: Some(self.name.clone()),
            coach: self.coach.clone(),
            city: self.city.clone(),
        }
    }
}
