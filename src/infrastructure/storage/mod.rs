//! Storage infrastructure - SQLite pool and schema bootstrap

mod schema;
mod sqlite;

pub use schema::ensure_schema;
pub use sqlite::{connect, SqliteConfig};
