use std::sync::Arc;

use actix_web::{delete, web};

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserDeleteRes;

#[delete("/{id}")]
async fn delete(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> ApiResult<UserDeleteRes> {
    let id = path.into_inner();

    let user = db
        .find_user_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    db.delete_user(user).await?;

    Ok(ApiResponse::Ok(UserDeleteRes {
        message: "User deleted successfully.".to_string(),
    }))
}
