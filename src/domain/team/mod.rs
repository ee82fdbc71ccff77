//! Team domain module
//!
//! A team is the single record kept by the store: a surrogate id plus a
//! required name and optional coach and city.

mod entity;
mod repository;
mod validation;

pub use entity::{Team, TeamFields, TeamId};
pub use repository::TeamRepository;
pub use validation::{validate_team_id, validate_team_name, TeamValidationError};

#[cfg(test)]
pub use repository::mock;
