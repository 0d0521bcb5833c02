use serde::{Serialize, Deserialize};
use validator::Validate;

/// Create request body. `email` is the only field callers must supply; a
/// missing field decodes to empty so that presence is judged by the
/// validator, not by the codec.
#[derive(Debug, Serialize, Deserialize)]
pub struct RUserCreate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Partial update body. `None` means "leave the field untouched"; a field
/// supplied as empty is a real value and has to survive validation. `id`
/// and `created_at` have no slot here, so a merge can never reach them.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RUserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl RUserUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// Candidate user value as the validator sees it: the full mutable field
/// set, either fresh from a create request or the result of merging an
/// update onto the stored row.
#[derive(Debug, Validate)]
pub struct UserDraft {
    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "email is required"),
        email(message = "email is not a valid email address")
    )]
    pub email: String,
}

#[derive(Serialize)]
pub struct UserCreateRes {
    pub message: String,
}

#[derive(Serialize)]
pub struct UserUpdateRes {
    pub message: String,
}

#[derive(Serialize)]
pub struct UserDeleteRes {
    pub message: String,
}
