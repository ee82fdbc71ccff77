//! Team validation

use thiserror::Error;

/// Errors that can occur during team validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TeamValidationError {
    #[error("Team name is required")]
    EmptyName,

    #[error("Team ID must be a positive integer, got '{0}'")]
    InvalidId(String),
}

/// Validate a team name
///
/// A name consisting only of whitespace counts as empty.
pub fn validate_team_name(name: &str) -> Result<(), TeamValidationError> {
    if name.trim().is_empty() {
        return Err(TeamValidationError::EmptyName);
    }

    Ok(())
}

/// Validate a raw team ID as it arrives from a path segment
pub fn validate_team_id(raw: &str) -> Result<i64, TeamValidationError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(TeamValidationError::InvalidId(raw.to_string())),
    }
}
