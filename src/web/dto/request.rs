//! Request DTOs for the Web API.

use serde::Deserialize;
use validator::Validate;

use super::validation::{no_control_chars, not_empty_trimmed};

/// Maximum length of a display name (in characters).
pub const MAX_NAME_LENGTH: u64 = 50;

/// Maximum length of a message (in characters).
pub const MAX_MESSAGE_LENGTH: u64 = 2000;

/// Body of `POST /api/discussion` and `POST /api/discussion/:id/reply`.
#[derive(Debug, Deserialize, Validate)]
pub struct PostMessageRequest {
    /// Display name.
    #[serde(default)]
    #[validate(
        length(max = MAX_NAME_LENGTH, message = "Name must be at most 50 characters"),
        custom(function = "not_empty_trimmed"),
        custom(function = "no_control_chars")
    )]
    pub name: String,
    /// Message text.
    #[serde(default)]
    #[validate(
        length(max = MAX_MESSAGE_LENGTH, message = "Message must be at most 2000 characters"),
        custom(function = "not_empty_trimmed"),
        custom(function = "no_control_chars")
    )]
    pub message: String,
}
