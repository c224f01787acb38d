//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Comment form, used both to create and to edit a comment
///
/// Missing fields deserialize as empty strings so they fail validation with
/// a field message rather than a body parse error.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CommentForm {
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Username is required."),
        length(max = 100, message = "Username must be at most 100 characters.")
    )]
    pub username: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Comment cannot be empty."))]
    pub text: String,
}

impl CommentForm {
    pub fn new(username: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            text: text.into(),
        }
    }

    /// Copy with both fields trimmed
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self::new(self.username.trim(), self.text.trim())
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
