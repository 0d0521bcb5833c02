use std::sync::Arc;

use actix_web::{post, web};
use validator::Validate;

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserCreate, UserCreateRes, UserDraft};

#[post("")]
async fn create(
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserCreateRes> {
    let RUserCreate { name, email } = body.into_inner();

    if db.find_user_by_email(&email).await?.is_some() {
        return Err(AppError::Conflict("Email already exists.".to_string()));
    }

    let draft = UserDraft { name, email };
    draft.validate()?;

    db.insert_user(draft.name, draft.email).await?;

    Ok(ApiResponse::Created(UserCreateRes {
        message: "User created successfully.".to_string(),
    }))
}
