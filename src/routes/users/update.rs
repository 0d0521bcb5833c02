use std::sync::Arc;

use actix_web::{put, web};
use validator::Validate;

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserUpdate, UserDraft, UserUpdateRes};

#[put("/{id}")]
async fn update(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
    body: web::Bytes,
) -> ApiResult<UserUpdateRes> {
    let id = path.into_inner();

    let user = db
        .find_user_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    // the row has to exist before the body is judged, so the patch is
    // decoded here instead of by the extractor
    let update: RUserUpdate = serde_json::from_slice(&body).map_err(|err| {
        log::debug!("rejecting request body: {err}");
        AppError::BadRequest("Invalid JSON format.".to_string())
    })?;

    // a body that decodes to no fields at all is treated as malformed
    if update.is_empty() {
        return Err(AppError::BadRequest("Invalid JSON format.".to_string()));
    }

    if let Some(email) = update.email.as_deref() {
        if email != user.email {
            if let Some(other) = db.find_user_by_email(email).await? {
                if other.id != user.id {
                    return Err(AppError::Conflict(
                        "Email already used by another user.".to_string(),
                    ));
                }
            }
        }
    }

    let draft = UserDraft {
        name: update.name.clone().unwrap_or_else(|| user.name.clone()),
        email: update.email.clone().unwrap_or_else(|| user.email.clone()),
    };
    draft.validate()?;

    db.update_user(user, update).await?;

    Ok(ApiResponse::Ok(UserUpdateRes {
        message: "User updated successfully.".to_string(),
    }))
}
