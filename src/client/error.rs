use thiserror::Error;

/// Errors surfaced by the team store client
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClientError {
    /// The store could not be reached or the connection broke
    #[error("Transport error: {0}")]
    Transport(String),

    /// The store answered with a non-success status
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The store answered with a body we could not read
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// Whether the request reached the store and was refused
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
