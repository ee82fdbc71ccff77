//! Team infrastructure implementations

mod repository;
mod service;

pub use repository::SqliteTeamRepository;
pub use service::TeamService;
