/// Web API Handlers
///
/// This module contains the handlers for the RESTful API endpoints.
/// Each handler is responsible for processing a specific type of HTTP request,
/// validating its input, calling the appropriate repository functions,
/// and returning a response in the uniform envelope.

mod room_handlers;
mod user_handlers;

// Re-export all handlers
pub use room_handlers::*;
pub use user_handlers::*;

use crate::errors::ApiError;

/// Parses an integer path parameter
///
/// IDs and capacities arrive as raw path segments so that a non-numeric
/// value maps to the envelope's 400 response instead of the framework's
/// default rejection, and never reaches the repository.
pub(crate) fn parse_int_param(raw: &str, message: &'static str) -> Result<i32, ApiError> {
    raw.parse::<i32>().map_err(|_| ApiError::InvalidId(message))
}
