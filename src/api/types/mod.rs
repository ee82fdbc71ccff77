//! Shared request/response types for the HTTP API

mod error;
mod json;

pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};
pub use json::{Json, JsonRejection};
