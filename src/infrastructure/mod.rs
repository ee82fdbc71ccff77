//! Infrastructure layer - SQLite storage, services, logging and metrics

pub mod logging;
pub mod observability;
pub mod storage;
pub mod team;
