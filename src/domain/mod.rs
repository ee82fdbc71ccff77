//! Domain layer - entities, validation and repository contracts

mod error;
pub mod team;

pub use error::DomainError;
pub use team::{Team, TeamFields, TeamId, TeamRepository};
