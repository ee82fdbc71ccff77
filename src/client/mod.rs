//! Client side of the team store: an HTTP client and the form driven by it

mod error;
mod form;
mod http;

pub use error::ClientError;
pub use form::{render_team, FormCommand, FormResponse, Notice, TeamForm, HELP};
pub use http::{HttpTeamsClient, TeamsClient, DEFAULT_API_URL};

#[cfg(test)]
pub use http::MockTeamsClient;
