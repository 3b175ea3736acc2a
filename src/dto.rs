use serde::{Deserialize, Serialize};

/// Uniform response envelope used by all endpoints
///
/// Every response carries a `status` of `"success"` or `"error"` and a
/// human-readable `message`. Successful responses carry the entity (or
/// list) in `data`; some error responses carry extra context in `error`.
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
    /// Either "success" or "error"
    pub status: String,

    /// Human-readable outcome description
    pub message: String,

    /// The entity or list returned on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Extra error context, present on some failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

/// Detail payload carried by some error responses
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}

impl<T> ApiResponse<T> {
    /// Builds a success envelope wrapping the given data
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            data: Some(data),
            error: None,
        }
    }

    /// Builds an error envelope with just a message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            data: None,
            error: None,
        }
    }

    /// Builds an error envelope with a message and a detail string
    pub fn error_with_detail(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            data: None,
            error: Some(ErrorDetail { detail: detail.into() }),
        }
    }
}

/// Request body for creating or updating a user
///
/// The same shape serves both POST and PUT: updates are full-record
/// overwrites, so the body carries every field each time. All fields are
/// optional at the serde level; presence of required fields is checked in
/// the handlers so that a missing `name` yields the envelope's 400 rather
/// than a deserialization rejection.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct UserBodyDto {
    /// The user's display name (required, validated in the handler)
    pub name: Option<String>,

    /// The user's email address, unique across users
    pub email: Option<String>,

    /// The plaintext password; hashed before it reaches the repository
    pub password: Option<String>,

    /// The user's telephone number
    pub tel: Option<String>,

    /// The user's role, defaulting to "user"
    pub role: Option<String>,
}

/// Request body for creating or updating a room
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RoomBodyDto {
    /// The room's name (required, validated in the handler)
    pub name: Option<String>,

    /// How many people the room holds (required, validated in the handler)
    pub capacity: Option<i32>,

    /// Free-form description of the room
    pub description: Option<String>,
}
